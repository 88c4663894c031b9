use std::collections::BTreeSet;

use uuid::Uuid;

use crate::domain::{allergen::entities::Allergen, dish::entities::DishConfig};

#[derive(Debug, Clone)]
pub struct CreateDishInput {
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub ingredient_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct UpdateDishInput {
    pub dish_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub ingredient_ids: Vec<Uuid>,
}

/// Two queries with the same restaurant and the same excluded allergens are
/// equal, whatever order the set was built in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeDishQuery {
    pub restaurant_id: Uuid,
    pub excluded: BTreeSet<Allergen>,
}

impl From<&CreateDishInput> for DishConfig {
    fn from(input: &CreateDishInput) -> Self {
        Self {
            name: input.name.clone(),
            description: input.description.clone(),
            price_cents: input.price_cents,
            is_available: input.is_available,
            is_vegetarian: input.is_vegetarian,
            is_vegan: input.is_vegan,
        }
    }
}

impl From<&UpdateDishInput> for DishConfig {
    fn from(input: &UpdateDishInput) -> Self {
        Self {
            name: input.name.clone(),
            description: input.description.clone(),
            price_cents: input.price_cents,
            is_available: input.is_available,
            is_vegetarian: input.is_vegetarian,
            is_vegan: input.is_vegan,
        }
    }
}
