use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRestaurantValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "address is required"))]
    pub address: String,

    #[validate(length(max = 50, message = "phone is too long"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRestaurantValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "address is required"))]
    pub address: String,

    #[validate(length(max = 50, message = "phone is too long"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}
