use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{entities::Ingredient, ports::IngredientRepository},
    },
    entity::{
        ingredient_allergens::{
            ActiveModel as TagActiveModel, Column as TagColumn, Entity as TagEntity,
        },
        ingredients::{ActiveModel, Column, Entity, Model},
    },
    infrastructure::ingredient::mappers::map_ingredients,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Attaches allergen tags to ingredient rows, keeping the row order.
pub(crate) async fn with_allergens<C>(db: &C, models: Vec<Model>) -> Result<Vec<Ingredient>, CoreError>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let tags = TagEntity::find()
        .filter(TagColumn::IngredientId.is_in(ids))
        .all(db)
        .await
        .map_err(|e| {
            error!("Failed to load ingredient allergens: {}", e);
            CoreError::InternalServerError
        })?;

    map_ingredients(&models, tags)
}

fn tag_models(ingredient: &Ingredient) -> Vec<TagActiveModel> {
    ingredient
        .allergens
        .iter()
        .map(|allergen| TagActiveModel {
            ingredient_id: Set(ingredient.id),
            allergen: Set(allergen.code().to_string()),
        })
        .collect()
}

fn map_write_error(e: DbErr, ingredient: &Ingredient, action: &str) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::DuplicateName(ingredient.name.clone());
    }
    error!("Failed to {} ingredient: {}", action, e);
    CoreError::InternalServerError
}

fn lower_name() -> sea_orm::sea_query::SimpleExpr {
    Func::lower(Expr::col(Column::Name)).into()
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        with_allergens(&self.db, models).await
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let model = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(with_allergens(&self.db, model.into_iter().collect())
            .await?
            .pop())
    }

    async fn get_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        let models = Entity::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredients by ids: {}", e);
                CoreError::InternalServerError
            })?;

        with_allergens(&self.db, models).await
    }

    async fn find_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let model = Entity::find()
            .filter(Expr::expr(lower_name()).eq(name.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find ingredient by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(with_allergens(&self.db, model.into_iter().collect())
            .await?
            .pop())
    }

    async fn search_by_name(&self, query: String) -> Result<Vec<Ingredient>, CoreError> {
        let pattern = format!(
            "%{}%",
            query
                .to_lowercase()
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_")
        );

        let models = Entity::find()
            .filter(Expr::expr(lower_name()).like(pattern))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        with_allergens(&self.db, models).await
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = ActiveModel {
            id: Set(ingredient.id),
            name: Set(ingredient.name.clone()),
            description: Set(ingredient.description.clone()),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec(&txn)
            .await
            .map_err(|e| map_write_error(e, &ingredient, "create"))?;

        let tags = tag_models(&ingredient);
        if !tags.is_empty() {
            TagEntity::insert_many(tags)
                .exec(&txn)
                .await
                .map_err(|e| map_write_error(e, &ingredient, "tag"))?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit ingredient: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ingredient)
    }

    async fn update_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = ActiveModel {
            id: Set(ingredient.id),
            name: Set(ingredient.name.clone()),
            description: Set(ingredient.description.clone()),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        };

        active_model
            .update(&txn)
            .await
            .map_err(|e| map_write_error(e, &ingredient, "update"))?;

        TagEntity::delete_many()
            .filter(TagColumn::IngredientId.eq(ingredient.id))
            .exec(&txn)
            .await
            .map_err(|e| map_write_error(e, &ingredient, "untag"))?;

        let tags = tag_models(&ingredient);
        if !tags.is_empty() {
            TagEntity::insert_many(tags)
                .exec(&txn)
                .await
                .map_err(|e| map_write_error(e, &ingredient, "tag"))?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit ingredient: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ingredient)
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
