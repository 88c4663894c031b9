use std::sync::Arc;

use crate::{
    domain::common::{SafeMenuConfig, services::Service},
    infrastructure::{
        cache::InMemoryDerivedViewCache,
        db::postgres::{Postgres, PostgresConfig},
        dish::repositories::dish_postgres_repository::PostgresDishRepository,
        health::repositories::health_postgres_repository::PostgresHealthCheckRepository,
        ingredient::repositories::ingredient_postgres_repository::PostgresIngredientRepository,
        menu_category::repositories::menu_category_postgres_repository::PostgresMenuCategoryRepository,
        restaurant::repositories::restaurant_postgres_repository::PostgresRestaurantRepository,
    },
};

pub type SafeMenuService = Service<
    PostgresRestaurantRepository,
    PostgresMenuCategoryRepository,
    PostgresIngredientRepository,
    PostgresDishRepository,
    InMemoryDerivedViewCache,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: SafeMenuConfig) -> Result<SafeMenuService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
    })
    .await?;

    let view_cache = Arc::new(InMemoryDerivedViewCache::new(config.cache));

    Ok(Service::new(
        PostgresRestaurantRepository::new(postgres.get_db()),
        PostgresMenuCategoryRepository::new(postgres.get_db()),
        PostgresIngredientRepository::new(postgres.get_db()),
        PostgresDishRepository::new(postgres.get_db()),
        view_cache,
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
