pub mod allergen;
pub mod dish;
pub mod health;
pub mod ingredient;
pub mod menu_category;
pub mod query_extractor;
pub mod restaurant;
pub mod server;
