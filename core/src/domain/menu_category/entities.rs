use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuCategory {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuCategory {
    pub fn new(
        restaurant_id: Uuid,
        name: String,
        description: Option<String>,
        display_order: i32,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            restaurant_id,
            name,
            description,
            display_order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: String, description: Option<String>, display_order: i32) {
        self.name = name;
        self.description = description;
        self.display_order = display_order;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: MenuCategory,
    pub restaurant_name: String,
    pub dish_count: u64,
}
