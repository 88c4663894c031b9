use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Statement,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        menu_category::{
            entities::{CategorySummary, MenuCategory},
            ports::MenuCategoryRepository,
        },
    },
    entity::{
        menu_categories::{ActiveModel, Column, Entity},
        restaurants::Entity as RestaurantEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresMenuCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn restaurant_name(&self, restaurant_id: Uuid) -> Result<String, CoreError> {
        let restaurant = RestaurantEntity::find_by_id(restaurant_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get category restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(restaurant.map(|r| r.name).unwrap_or_default())
    }

    async fn dish_counts(&self, restaurant_id: Uuid) -> Result<HashMap<Uuid, u64>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT c.id AS id, COUNT(d.id) AS dish_count
            FROM menu_categories c
            LEFT JOIN dishes d ON d.category_id = c.id
            WHERE c.restaurant_id = $1
            GROUP BY c.id
            "#,
            [restaurant_id.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to count category dishes: {}", e);
            CoreError::InternalServerError
        })?;

        let mut counts = HashMap::with_capacity(rows.len());
        for row in rows {
            let id = row.try_get::<Uuid>("", "id").map_err(|e| {
                error!("Failed to read category id: {}", e);
                CoreError::InternalServerError
            })?;
            let dishes = row.try_get::<i64>("", "dish_count").unwrap_or(0);
            counts.insert(id, dishes.max(0) as u64);
        }

        Ok(counts)
    }

    fn active_model(category: MenuCategory) -> ActiveModel {
        ActiveModel {
            id: Set(category.id),
            restaurant_id: Set(category.restaurant_id),
            name: Set(category.name),
            description: Set(category.description),
            display_order: Set(category.display_order),
            created_at: Set(category.created_at.fixed_offset()),
            updated_at: Set(category.updated_at.fixed_offset()),
        }
    }
}

impl MenuCategoryRepository for PostgresMenuCategoryRepository {
    async fn fetch_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<CategorySummary>, CoreError> {
        let models = Entity::find()
            .filter(Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch menu categories: {}", e);
                CoreError::InternalServerError
            })?;

        let restaurant_name = self.restaurant_name(restaurant_id).await?;
        let counts = self.dish_counts(restaurant_id).await?;

        Ok(models
            .iter()
            .map(|model| CategorySummary {
                category: MenuCategory::from(model),
                restaurant_name: restaurant_name.clone(),
                dish_count: counts.get(&model.id).copied().unwrap_or(0),
            })
            .collect())
    }

    async fn get_by_id(&self, category_id: Uuid) -> Result<Option<MenuCategory>, CoreError> {
        let model = Entity::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(MenuCategory::from))
    }

    async fn get_summary_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<CategorySummary>, CoreError> {
        let Some(category) = self.get_by_id(category_id).await? else {
            return Ok(None);
        };

        let restaurant_name = self.restaurant_name(category.restaurant_id).await?;
        let dish_count = self
            .dish_counts(category.restaurant_id)
            .await?
            .get(&category.id)
            .copied()
            .unwrap_or(0);

        Ok(Some(CategorySummary {
            category,
            restaurant_name,
            dish_count,
        }))
    }

    async fn create_category(&self, category: MenuCategory) -> Result<MenuCategory, CoreError> {
        let created = Entity::insert(Self::active_model(category))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create menu category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn update_category(&self, category: MenuCategory) -> Result<MenuCategory, CoreError> {
        let updated = Self::active_model(category)
            .update(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update menu category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated.into())
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete menu category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
