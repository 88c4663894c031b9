pub mod allergen;
pub mod common;
pub mod derived_view;
pub mod dish;
pub mod health;
pub mod ingredient;
pub mod menu_category;
pub mod restaurant;
