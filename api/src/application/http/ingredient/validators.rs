use std::collections::BTreeSet;

use safemenu_core::domain::allergen::entities::Allergen;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct IngredientValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Allergen identifiers, e.g. `["MILK", "NUTS"]`. Duplicates collapse.
    #[serde(default)]
    #[schema(value_type = Vec<Allergen>)]
    pub allergens: BTreeSet<Allergen>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ListIngredientsQuery {
    pub search: Option<String>,
}
