use std::sync::Arc;

use crate::domain::{
    derived_view::ports::DerivedViewCache, dish::ports::DishRepository,
    health::ports::HealthCheckRepository, ingredient::ports::IngredientRepository,
    menu_category::ports::MenuCategoryRepository, restaurant::ports::RestaurantRepository,
};

/// Entry point for every use case. Each domain module implements its
/// service trait on this struct; adapters are injected at construction.
pub struct Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    pub(crate) restaurant_repository: Arc<R>,
    pub(crate) category_repository: Arc<MC>,
    pub(crate) ingredient_repository: Arc<I>,
    pub(crate) dish_repository: Arc<D>,
    pub(crate) view_cache: Arc<DC>,
    pub(crate) health_check_repository: Arc<HC>,
}

impl<R, MC, I, D, DC, HC> Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    pub fn new(
        restaurant_repository: R,
        category_repository: MC,
        ingredient_repository: I,
        dish_repository: D,
        view_cache: Arc<DC>,
        health_check_repository: HC,
    ) -> Self {
        Self {
            restaurant_repository: Arc::new(restaurant_repository),
            category_repository: Arc::new(category_repository),
            ingredient_repository: Arc::new(ingredient_repository),
            dish_repository: Arc::new(dish_repository),
            view_cache,
            health_check_repository: Arc::new(health_check_repository),
        }
    }

    pub fn view_cache(&self) -> &DC {
        &self.view_cache
    }
}

impl<R, MC, I, D, DC, HC> Clone for Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    fn clone(&self) -> Self {
        Self {
            restaurant_repository: Arc::clone(&self.restaurant_repository),
            category_repository: Arc::clone(&self.category_repository),
            ingredient_repository: Arc::clone(&self.ingredient_repository),
            dish_repository: Arc::clone(&self.dish_repository),
            view_cache: Arc::clone(&self.view_cache),
            health_check_repository: Arc::clone(&self.health_check_repository),
        }
    }
}
