use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

impl Restaurant {
    pub fn new(config: RestaurantConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            address: config.address,
            phone: config.phone,
            email: config.email,
            description: config.description,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, config: RestaurantConfig, is_active: Option<bool>) {
        self.name = config.name;
        self.address = config.address;
        self.phone = config.phone;
        self.email = config.email;
        self.description = config.description;
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}

/// A restaurant together with the size of its menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSummary {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub category_count: u64,
    pub dish_count: u64,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            restaurant,
            category_count: 0,
            dish_count: 0,
        }
    }
}
