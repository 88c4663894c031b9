use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{allergen::entities::Allergen, dish::entities::Dish, ingredient::entities::Ingredient};

pub const NO_KNOWN_ALLERGENS: &str = "No known allergens";
pub const WARNING_PREFIX: &str = "⚠ Contains: ";

/// Union of the allergen tags carried by `ingredients`.
pub fn compute_allergens<'a, I>(ingredients: I) -> BTreeSet<Allergen>
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    ingredients
        .into_iter()
        .flat_map(|ingredient| ingredient.allergens.iter().copied())
        .collect()
}

/// Keeps the available dishes whose computed allergens do not intersect
/// `excluded`. Input order is preserved.
pub fn find_safe(dishes: Vec<Dish>, excluded: &BTreeSet<Allergen>) -> Vec<Dish> {
    dishes
        .into_iter()
        .filter(|dish| dish.is_available && is_safe(dish, excluded))
        .collect()
}

pub fn is_safe(dish: &Dish, excluded: &BTreeSet<Allergen>) -> bool {
    excluded.is_empty() || compute_allergens(&dish.ingredients).is_disjoint(excluded)
}

/// Renders a warning such as `⚠ Contains: Crustaceans, Eggs`, with names
/// sorted lexically whatever the iteration order of the input.
pub fn format_warning<'a, I>(allergens: I) -> String
where
    I: IntoIterator<Item = &'a Allergen>,
{
    let mut names: Vec<&'static str> = allergens
        .into_iter()
        .map(Allergen::display_name)
        .collect();

    if names.is_empty() {
        return NO_KNOWN_ALLERGENS.to_string();
    }

    names.sort_unstable();
    names.dedup();

    format!("{WARNING_PREFIX}{}", names.join(", "))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ComputedAllergenProfile {
    #[schema(value_type = Vec<Allergen>)]
    pub allergens: BTreeSet<Allergen>,
    pub warning: String,
}

impl ComputedAllergenProfile {
    pub fn from_ingredients<'a, I>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = &'a Ingredient>,
    {
        Self::from(compute_allergens(ingredients))
    }
}

impl From<BTreeSet<Allergen>> for ComputedAllergenProfile {
    fn from(allergens: BTreeSet<Allergen>) -> Self {
        let warning = format_warning(&allergens);
        Self { allergens, warning }
    }
}
