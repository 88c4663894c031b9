use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    derived_view::ports::DerivedViewCache,
    dish::ports::DishRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    menu_category::ports::MenuCategoryRepository,
    restaurant::ports::RestaurantRepository,
};

impl<R, MC, I, D, DC, HC> HealthCheckService for Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
