use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    EntityTrait, QueryOrder, Statement,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        restaurant::{
            entities::{Restaurant, RestaurantSummary},
            ports::RestaurantRepository,
        },
    },
    entity::restaurants::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRestaurantRepository {
    pub db: DatabaseConnection,
}

impl PostgresRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Category and dish counts keyed by restaurant id; `None` counts every
    /// restaurant.
    async fn menu_counts(
        &self,
        restaurant_id: Option<Uuid>,
    ) -> Result<HashMap<Uuid, (u64, u64)>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              r.id AS id,
              COUNT(DISTINCT c.id) AS category_count,
              COUNT(d.id) AS dish_count
            FROM restaurants r
            LEFT JOIN menu_categories c ON c.restaurant_id = r.id
            LEFT JOIN dishes d ON d.category_id = c.id
            WHERE ($1::uuid IS NULL OR r.id = $1)
            GROUP BY r.id
            "#,
            [restaurant_id.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to count restaurant menus: {}", e);
            CoreError::InternalServerError
        })?;

        let mut counts = HashMap::with_capacity(rows.len());
        for row in rows {
            let id = row.try_get::<Uuid>("", "id").map_err(|e| {
                error!("Failed to read restaurant id: {}", e);
                CoreError::InternalServerError
            })?;
            let categories = row.try_get::<i64>("", "category_count").unwrap_or(0);
            let dishes = row.try_get::<i64>("", "dish_count").unwrap_or(0);
            counts.insert(id, (categories.max(0) as u64, dishes.max(0) as u64));
        }

        Ok(counts)
    }

    fn summarize(
        restaurant: Restaurant,
        counts: &HashMap<Uuid, (u64, u64)>,
    ) -> RestaurantSummary {
        let (category_count, dish_count) = counts.get(&restaurant.id).copied().unwrap_or((0, 0));
        RestaurantSummary {
            restaurant,
            category_count,
            dish_count,
        }
    }
}

impl RestaurantRepository for PostgresRestaurantRepository {
    async fn fetch_restaurants(&self) -> Result<Vec<RestaurantSummary>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch restaurants: {}", e);
                CoreError::InternalServerError
            })?;

        let counts = self.menu_counts(None).await?;

        Ok(models
            .iter()
            .map(|model| Self::summarize(Restaurant::from(model), &counts))
            .collect())
    }

    async fn get_by_id(&self, restaurant_id: Uuid) -> Result<Option<Restaurant>, CoreError> {
        let model = Entity::find_by_id(restaurant_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Restaurant::from))
    }

    async fn get_summary_by_id(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Option<RestaurantSummary>, CoreError> {
        let Some(restaurant) = self.get_by_id(restaurant_id).await? else {
            return Ok(None);
        };

        let counts = self.menu_counts(Some(restaurant_id)).await?;

        Ok(Some(Self::summarize(restaurant, &counts)))
    }

    async fn create_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant, CoreError> {
        let active_model = ActiveModel {
            id: Set(restaurant.id),
            name: Set(restaurant.name),
            address: Set(restaurant.address),
            phone: Set(restaurant.phone),
            email: Set(restaurant.email),
            description: Set(restaurant.description),
            is_active: Set(restaurant.is_active),
            created_at: Set(restaurant.created_at.fixed_offset()),
            updated_at: Set(restaurant.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn update_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant, CoreError> {
        let active_model = ActiveModel {
            id: Set(restaurant.id),
            name: Set(restaurant.name),
            address: Set(restaurant.address),
            phone: Set(restaurant.phone),
            email: Set(restaurant.email),
            description: Set(restaurant.description),
            is_active: Set(restaurant.is_active),
            created_at: Set(restaurant.created_at.fixed_offset()),
            updated_at: Set(restaurant.updated_at.fixed_offset()),
        };

        let updated = active_model.update(&self.db).await.map_err(|e| {
            error!("Failed to update restaurant: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated.into())
    }

    async fn delete_restaurant(&self, restaurant_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(restaurant_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
