use utoipa::OpenApi;

use crate::application::http::{
    allergen::router::AllergenApiDoc, dish::router::DishApiDoc, health::HealthApiDoc,
    ingredient::router::IngredientApiDoc, menu_category::router::MenuCategoryApiDoc,
    restaurant::router::RestaurantApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SafeMenu API",
        description = "Restaurant menus with allergen aggregation and safe-dish filtering"
    ),
    tags(
        (name = "allergen", description = "EU allergen catalog"),
        (name = "restaurant", description = "Restaurants"),
        (name = "menu_category", description = "Menu categories"),
        (name = "ingredient", description = "Ingredients and their allergen tags"),
        (name = "dish", description = "Dishes, menu pages and safe-dish queries"),
        (name = "health", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(AllergenApiDoc::openapi());
        openapi.merge(RestaurantApiDoc::openapi());
        openapi.merge(MenuCategoryApiDoc::openapi());
        openapi.merge(IngredientApiDoc::openapi());
        openapi.merge(DishApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
