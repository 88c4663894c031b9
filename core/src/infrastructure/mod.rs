pub mod cache;
pub mod db;
pub mod dish;
pub mod health;
pub mod ingredient;
pub mod menu_category;
pub mod restaurant;
