use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "display_order must not be negative"))]
    #[serde(default)]
    pub display_order: i32,
}
