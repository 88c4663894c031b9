use std::{collections::BTreeSet, fmt};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    allergen::entities::Allergen, common::value_objects::Paginated, dish::entities::DishView,
};

/// The two families of cacheable responses. Both are evicted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewFamily {
    MenuPage,
    SafeDishes,
}

impl fmt::Display for ViewFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewFamily::MenuPage => write!(f, "menu_page"),
            ViewFamily::SafeDishes => write!(f, "safe_dishes"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DerivedView {
    MenuPage { page: u64 },
    SafeDishes { excluded: BTreeSet<Allergen> },
}

/// Identifies one cached response. Equal queries always produce equal keys:
/// the excluded set is ordered and the page size plays no part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedViewKey {
    pub restaurant_id: Uuid,
    pub view: DerivedView,
}

impl DerivedViewKey {
    pub fn menu_page(restaurant_id: Uuid, page: u64) -> Self {
        Self {
            restaurant_id,
            view: DerivedView::MenuPage { page },
        }
    }

    pub fn safe_dishes(restaurant_id: Uuid, excluded: &BTreeSet<Allergen>) -> Self {
        Self {
            restaurant_id,
            view: DerivedView::SafeDishes {
                excluded: excluded.clone(),
            },
        }
    }

    pub fn family(&self) -> ViewFamily {
        match self.view {
            DerivedView::MenuPage { .. } => ViewFamily::MenuPage,
            DerivedView::SafeDishes { .. } => ViewFamily::SafeDishes,
        }
    }

    /// `{restaurant_id}-{page}` or `{restaurant_id}-{codes}` with the
    /// allergen codes sorted lexically and joined by `,`.
    pub fn render(&self) -> String {
        match &self.view {
            DerivedView::MenuPage { page } => format!("{}-{}", self.restaurant_id, page),
            DerivedView::SafeDishes { excluded } => {
                let mut codes: Vec<&str> = excluded.iter().map(|a| a.code()).collect();
                codes.sort_unstable();
                format!("{}-{}", self.restaurant_id, codes.join(","))
            }
        }
    }
}

impl fmt::Display for DerivedViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family(), self.render())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CachedView {
    MenuPage(Paginated<DishView>),
    SafeDishes(Vec<DishView>),
}

impl CachedView {
    pub fn family(&self) -> ViewFamily {
        match self {
            CachedView::MenuPage(_) => ViewFamily::MenuPage,
            CachedView::SafeDishes(_) => ViewFamily::SafeDishes,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
    pub evictions: u64,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn menu_page_key_is_restaurant_and_page() {
        let restaurant_id = Uuid::nil();
        let key = DerivedViewKey::menu_page(restaurant_id, 3);

        assert_eq!(key.render(), format!("{restaurant_id}-3"));
        assert_eq!(key.family(), ViewFamily::MenuPage);
    }

    #[test]
    fn safe_dish_key_joins_sorted_codes() {
        let restaurant_id = Uuid::nil();
        let excluded = BTreeSet::from([Allergen::Nuts, Allergen::Milk, Allergen::CerealsWithGluten]);
        let key = DerivedViewKey::safe_dishes(restaurant_id, &excluded);

        assert_eq!(
            key.render(),
            format!("{restaurant_id}-CEREALS_WITH_GLUTEN,MILK,NUTS")
        );
        assert_eq!(key.family(), ViewFamily::SafeDishes);
    }

    #[test]
    fn empty_exclusion_renders_trailing_dash() {
        let key = DerivedViewKey::safe_dishes(Uuid::nil(), &BTreeSet::new());

        assert_eq!(key.render(), format!("{}-", Uuid::nil()));
    }

    #[test]
    fn families_do_not_collide() {
        let id = Uuid::nil();
        let page = DerivedViewKey::menu_page(id, 0);
        let safe = DerivedViewKey::safe_dishes(id, &BTreeSet::new());

        assert_ne!(page, safe);
        assert_ne!(page.to_string(), safe.to_string());
    }

    proptest! {
        #[test]
        fn key_ignores_construction_order(
            picks in proptest::collection::vec(0..Allergen::ALL.len(), 0..14),
        ) {
            let restaurant_id = Uuid::nil();
            let forward: BTreeSet<Allergen> = picks.iter().map(|&i| Allergen::ALL[i]).collect();
            let reversed: BTreeSet<Allergen> =
                picks.iter().rev().map(|&i| Allergen::ALL[i]).collect();

            let a = DerivedViewKey::safe_dishes(restaurant_id, &forward);
            let b = DerivedViewKey::safe_dishes(restaurant_id, &reversed);

            prop_assert_eq!(a.render(), b.render());
            prop_assert_eq!(a, b);
        }
    }
}
