use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    domain::{
        allergen::entities::Allergen,
        common::{CacheConfig, generate_uuid_v7, services::Service},
        dish::{entities::Dish, ports::MockDishRepository},
        health::ports::MockHealthCheckRepository,
        ingredient::{entities::Ingredient, ports::MockIngredientRepository},
        menu_category::{entities::MenuCategory, ports::MockMenuCategoryRepository},
        restaurant::{entities::Restaurant, ports::MockRestaurantRepository},
    },
    infrastructure::cache::InMemoryDerivedViewCache,
};

pub type TestService = Service<
    MockRestaurantRepository,
    MockMenuCategoryRepository,
    MockIngredientRepository,
    MockDishRepository,
    InMemoryDerivedViewCache,
    MockHealthCheckRepository,
>;

/// Repository mocks wired to a real in-memory view cache.
#[derive(Default)]
pub struct Mocks {
    pub restaurants: MockRestaurantRepository,
    pub categories: MockMenuCategoryRepository,
    pub ingredients: MockIngredientRepository,
    pub dishes: MockDishRepository,
    pub health: MockHealthCheckRepository,
}

impl Mocks {
    pub fn into_service(self) -> TestService {
        self.into_service_with_cache(Arc::new(InMemoryDerivedViewCache::new(
            CacheConfig::default(),
        )))
    }

    /// Shares `cache` with the caller, so a mock can mutate it mid-call.
    pub fn into_service_with_cache(self, cache: Arc<InMemoryDerivedViewCache>) -> TestService {
        Service::new(
            self.restaurants,
            self.categories,
            self.ingredients,
            self.dishes,
            cache,
            self.health,
        )
    }
}

pub fn ingredient(name: &str, allergens: &[Allergen]) -> Ingredient {
    let now = Utc::now();
    Ingredient {
        id: generate_uuid_v7(),
        name: name.to_string(),
        description: None,
        allergens: allergens.iter().copied().collect(),
        created_at: now,
        updated_at: now,
    }
}

pub fn dish(name: &str, ingredients: Vec<Ingredient>) -> Dish {
    dish_in(Uuid::nil(), Uuid::nil(), name, ingredients)
}

pub fn dish_in(
    restaurant_id: Uuid,
    category_id: Uuid,
    name: &str,
    ingredients: Vec<Ingredient>,
) -> Dish {
    let now = Utc::now();
    Dish {
        id: generate_uuid_v7(),
        restaurant_id,
        category_id,
        category_name: "Mains".to_string(),
        name: name.to_string(),
        description: None,
        price_cents: 1250,
        is_available: true,
        is_vegetarian: false,
        is_vegan: false,
        ingredients,
        created_at: now,
        updated_at: now,
    }
}

pub fn restaurant(name: &str) -> Restaurant {
    let now = Utc::now();
    Restaurant {
        id: generate_uuid_v7(),
        name: name.to_string(),
        address: "1 High Street".to_string(),
        phone: None,
        email: None,
        description: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn category(restaurant_id: Uuid, name: &str, display_order: i32) -> MenuCategory {
    let now = Utc::now();
    MenuCategory {
        id: generate_uuid_v7(),
        restaurant_id,
        name: name.to_string(),
        description: None,
        display_order,
        created_at: now,
        updated_at: now,
    }
}
