use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{allergen::entities::Allergen, common::generate_timestamp};

/// A curated ingredient. `allergens` may be empty but is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<Allergen>)]
    pub allergens: BTreeSet<Allergen>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(name: String, description: Option<String>, allergens: BTreeSet<Allergen>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            description,
            allergens,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: String,
        description: Option<String>,
        allergens: BTreeSet<Allergen>,
    ) {
        self.name = name;
        self.description = description;
        self.allergens = allergens;
        self.updated_at = Utc::now();
    }
}
