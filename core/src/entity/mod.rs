pub mod prelude;

pub mod dish_ingredients;
pub mod dishes;
pub mod ingredient_allergens;
pub mod ingredients;
pub mod menu_categories;
pub mod restaurants;
