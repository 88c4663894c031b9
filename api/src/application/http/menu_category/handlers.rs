pub mod create_category;
pub mod delete_category;
pub mod get_categories;
pub mod get_category;
pub mod update_category;
