pub use super::dish_ingredients::Entity as DishIngredients;
pub use super::dishes::Entity as Dishes;
pub use super::ingredient_allergens::Entity as IngredientAllergens;
pub use super::ingredients::Entity as Ingredients;
pub use super::menu_categories::Entity as MenuCategories;
pub use super::restaurants::Entity as Restaurants;
