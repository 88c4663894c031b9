pub mod create_dish;
pub mod delete_dish;
pub mod get_category_dishes;
pub mod get_dish;
pub mod get_menu;
pub mod get_safe_dishes;
pub mod get_vegan_dishes;
pub mod get_vegetarian_dishes;
pub mod toggle_availability;
pub mod update_dish;
