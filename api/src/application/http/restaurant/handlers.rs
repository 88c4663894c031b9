pub mod create_restaurant;
pub mod delete_restaurant;
pub mod get_restaurant;
pub mod get_restaurants;
pub mod update_restaurant;
