use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn default_available() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DishValidator {
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Price in the smallest currency unit.
    #[validate(range(min = 0, message = "price_cents must not be negative"))]
    pub price_cents: i64,

    #[serde(default = "default_available")]
    pub is_available: bool,

    #[serde(default)]
    pub is_vegetarian: bool,

    #[serde(default)]
    pub is_vegan: bool,

    /// Ordered ingredient IDs; every ID must resolve.
    #[serde(default)]
    pub ingredient_ids: Vec<Uuid>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MenuPageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}
