use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// The 14 allergens that EU Regulation No 1169/2011 requires to be declared
/// on menus. The serialized identifiers are persisted on ingredients and
/// appear in cache keys: never rename or remove a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Allergen {
    Celery,
    CerealsWithGluten,
    Crustaceans,
    Eggs,
    Fish,
    Lupin,
    Milk,
    Molluscs,
    Mustard,
    Nuts,
    Peanuts,
    Sesame,
    Soybeans,
    SulphurDioxide,
}

impl Allergen {
    pub const ALL: [Allergen; 14] = [
        Allergen::Celery,
        Allergen::CerealsWithGluten,
        Allergen::Crustaceans,
        Allergen::Eggs,
        Allergen::Fish,
        Allergen::Lupin,
        Allergen::Milk,
        Allergen::Molluscs,
        Allergen::Mustard,
        Allergen::Nuts,
        Allergen::Peanuts,
        Allergen::Sesame,
        Allergen::Soybeans,
        Allergen::SulphurDioxide,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Allergen::Celery => "CELERY",
            Allergen::CerealsWithGluten => "CEREALS_WITH_GLUTEN",
            Allergen::Crustaceans => "CRUSTACEANS",
            Allergen::Eggs => "EGGS",
            Allergen::Fish => "FISH",
            Allergen::Lupin => "LUPIN",
            Allergen::Milk => "MILK",
            Allergen::Molluscs => "MOLLUSCS",
            Allergen::Mustard => "MUSTARD",
            Allergen::Nuts => "NUTS",
            Allergen::Peanuts => "PEANUTS",
            Allergen::Sesame => "SESAME",
            Allergen::Soybeans => "SOYBEANS",
            Allergen::SulphurDioxide => "SULPHUR_DIOXIDE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Allergen::Celery => "Celery",
            Allergen::CerealsWithGluten => "Cereals containing gluten",
            Allergen::Crustaceans => "Crustaceans",
            Allergen::Eggs => "Eggs",
            Allergen::Fish => "Fish",
            Allergen::Lupin => "Lupin",
            Allergen::Milk => "Milk",
            Allergen::Molluscs => "Molluscs",
            Allergen::Mustard => "Mustard",
            Allergen::Nuts => "Tree nuts",
            Allergen::Peanuts => "Peanuts",
            Allergen::Sesame => "Sesame seeds",
            Allergen::Soybeans => "Soybeans",
            Allergen::SulphurDioxide => "Sulphur dioxide / sulphites",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Allergen::Celery => "Including stalks, leaves, seeds, and celeriac",
            Allergen::CerealsWithGluten => "Wheat, rye, barley, oats, spelt, kamut",
            Allergen::Crustaceans => "Crabs, lobster, prawns, shrimp, scampi",
            Allergen::Eggs => "All egg-based products",
            Allergen::Fish => "All species of fish",
            Allergen::Lupin => "Lupin seeds and flour",
            Allergen::Milk => "Including lactose, all dairy products",
            Allergen::Molluscs => "Mussels, oysters, squid, snails",
            Allergen::Mustard => "Including mustard seeds, powder, and oil",
            Allergen::Nuts => {
                "Almonds, hazelnuts, walnuts, cashews, pecans, brazil nuts, pistachios, macadamia"
            }
            Allergen::Peanuts => "Including groundnuts and peanut oil",
            Allergen::Sesame => "Including sesame oil and paste (tahini)",
            Allergen::Soybeans => "Including soya, edamame, tofu, tempeh",
            Allergen::SulphurDioxide => "At concentrations above 10mg/kg or 10mg/litre",
        }
    }

    pub fn info(&self) -> AllergenInfo {
        AllergenInfo {
            code: *self,
            display_name: self.display_name().to_string(),
            description: self.description().to_string(),
        }
    }

    /// Every catalog entry, in declaration order.
    pub fn catalog() -> Vec<AllergenInfo> {
        Self::ALL.iter().map(Allergen::info).collect()
    }
}

// Ordered by display name so that sets render deterministically.
impl Ord for Allergen {
    fn cmp(&self, other: &Self) -> Ordering {
        self.display_name().cmp(other.display_name())
    }
}

impl PartialOrd for Allergen {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Allergen {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|allergen| allergen.code() == s)
            .ok_or_else(|| CoreError::UnknownAllergen(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergenInfo {
    pub code: Allergen,
    pub display_name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;

    #[test]
    fn test_catalog_is_exhaustive_and_unique() {
        let codes: HashSet<&str> = Allergen::ALL.iter().map(Allergen::code).collect();
        let names: HashSet<&str> = Allergen::ALL.iter().map(Allergen::display_name).collect();

        assert_eq!(codes.len(), 14);
        assert_eq!(names.len(), 14);
        assert_eq!(Allergen::catalog().len(), 14);
    }

    #[test]
    fn test_code_round_trips_through_from_str_and_serde() {
        for allergen in Allergen::ALL {
            assert_eq!(allergen.code().parse::<Allergen>(), Ok(allergen));

            let json = serde_json::to_string(&allergen).unwrap();
            assert_eq!(json, format!("\"{}\"", allergen.code()));
        }
    }

    #[test]
    fn test_unknown_code_fails_fast() {
        assert_eq!(
            "milk".parse::<Allergen>(),
            Err(CoreError::UnknownAllergen("milk".to_string()))
        );
        assert!(serde_json::from_str::<Allergen>("\"GLUTEN\"").is_err());
    }

    #[test]
    fn test_ordering_follows_display_name() {
        let set: BTreeSet<Allergen> = [Allergen::Nuts, Allergen::Celery, Allergen::CerealsWithGluten]
            .into_iter()
            .collect();
        let ordered: Vec<Allergen> = set.into_iter().collect();

        assert_eq!(
            ordered,
            vec![Allergen::Celery, Allergen::CerealsWithGluten, Allergen::Nuts]
        );
    }
}
