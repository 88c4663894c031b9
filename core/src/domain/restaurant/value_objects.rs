use uuid::Uuid;

use crate::domain::restaurant::entities::RestaurantConfig;

#[derive(Debug, Clone)]
pub struct CreateRestaurantInput {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateRestaurantInput {
    pub restaurant_id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl From<CreateRestaurantInput> for RestaurantConfig {
    fn from(input: CreateRestaurantInput) -> Self {
        Self {
            name: input.name,
            address: input.address,
            phone: input.phone,
            email: input.email,
            description: input.description,
        }
    }
}
