use std::collections::BTreeSet;

use uuid::Uuid;

use crate::domain::allergen::entities::Allergen;

#[derive(Debug, Clone)]
pub struct CreateIngredientInput {
    pub name: String,
    pub description: Option<String>,
    pub allergens: BTreeSet<Allergen>,
}

#[derive(Debug, Clone)]
pub struct UpdateIngredientInput {
    pub ingredient_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub allergens: BTreeSet<Allergen>,
}
