use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select, Statement, TransactionTrait, sea_query::JoinType,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{PageRequest, Paginated},
        },
        dish::{entities::Dish, ports::DishRepository},
        ingredient::entities::Ingredient,
    },
    entity::{
        dish_ingredients::{
            ActiveModel as LinkActiveModel, Column as LinkColumn, Entity as LinkEntity,
        },
        dishes::{self, ActiveModel, Column, Entity, Model},
        ingredients::{Column as IngredientColumn, Entity as IngredientEntity},
        menu_categories::{self, Column as CategoryColumn, Model as CategoryModel},
    },
    infrastructure::{
        dish::mappers::map_dishes,
        ingredient::repositories::ingredient_postgres_repository::with_allergens,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresDishRepository {
    pub db: DatabaseConnection,
}

impl PostgresDishRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dishes of one restaurant in menu order: category display order, then
    /// dish id.
    fn restaurant_menu(restaurant_id: Uuid) -> Select<Entity> {
        Entity::find()
            .join(JoinType::InnerJoin, dishes::Relation::MenuCategories.def())
            .filter(CategoryColumn::RestaurantId.eq(restaurant_id))
            .order_by_asc(CategoryColumn::DisplayOrder)
            .order_by_asc(Column::Id)
    }

    /// Materializes dishes with their category and ingredients. Ingredients
    /// keep the order they were listed in when the dish was saved.
    async fn hydrate(&self, models: Vec<Model>) -> Result<Vec<Dish>, CoreError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let dish_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let category_ids: Vec<Uuid> = models.iter().map(|m| m.category_id).collect();

        let categories: HashMap<Uuid, CategoryModel> = menu_categories::Entity::find()
            .filter(CategoryColumn::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load dish categories: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        let links = LinkEntity::find()
            .filter(LinkColumn::DishId.is_in(dish_ids))
            .order_by_asc(LinkColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load dish ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let ingredient_models = IngredientEntity::find()
            .filter(IngredientColumn::Id.is_in(links.iter().map(|l| l.ingredient_id)))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ingredients: {}", e);
                CoreError::InternalServerError
            })?;
        let ingredients: HashMap<Uuid, Ingredient> = with_allergens(&self.db, ingredient_models)
            .await?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();

        map_dishes(&models, &categories, links, &ingredients)
    }

    async fn replace_links<C>(db: &C, dish: &Dish) -> Result<(), CoreError>
    where
        C: ConnectionTrait,
    {
        LinkEntity::delete_many()
            .filter(LinkColumn::DishId.eq(dish.id))
            .exec(db)
            .await
            .map_err(|e| {
                error!("Failed to clear dish ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        if dish.ingredients.is_empty() {
            return Ok(());
        }

        let links = dish
            .ingredients
            .iter()
            .enumerate()
            .map(|(position, ingredient)| LinkActiveModel {
                dish_id: Set(dish.id),
                ingredient_id: Set(ingredient.id),
                position: Set(position as i32),
            });

        LinkEntity::insert_many(links).exec(db).await.map_err(|e| {
            error!("Failed to save dish ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }

    fn active_model(dish: &Dish) -> ActiveModel {
        ActiveModel {
            id: Set(dish.id),
            category_id: Set(dish.category_id),
            name: Set(dish.name.clone()),
            description: Set(dish.description.clone()),
            price_cents: Set(dish.price_cents),
            is_available: Set(dish.is_available),
            is_vegetarian: Set(dish.is_vegetarian),
            is_vegan: Set(dish.is_vegan),
            created_at: Set(dish.created_at.fixed_offset()),
            updated_at: Set(dish.updated_at.fixed_offset()),
        }
    }
}

impl DishRepository for PostgresDishRepository {
    async fn get_by_id(&self, dish_id: Uuid) -> Result<Option<Dish>, CoreError> {
        let model = Entity::find_by_id(dish_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get dish: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(self.hydrate(model.into_iter().collect()).await?.pop())
    }

    async fn fetch_by_category(&self, category_id: Uuid) -> Result<Vec<Dish>, CoreError> {
        let models = Entity::find()
            .filter(Column::CategoryId.eq(category_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch category dishes: {}", e);
                CoreError::InternalServerError
            })?;

        self.hydrate(models).await
    }

    async fn fetch_menu_page(
        &self,
        restaurant_id: Uuid,
        request: PageRequest,
    ) -> Result<Paginated<Dish>, CoreError> {
        let total_items = Self::restaurant_menu(restaurant_id)
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count menu dishes: {}", e);
                CoreError::InternalServerError
            })?;

        let models = Self::restaurant_menu(restaurant_id)
            .offset(request.offset())
            .limit(request.size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch menu page: {}", e);
                CoreError::InternalServerError
            })?;

        let dishes = self.hydrate(models).await?;

        Ok(Paginated::new(dishes, request, total_items))
    }

    async fn fetch_available_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<Dish>, CoreError> {
        let models = Self::restaurant_menu(restaurant_id)
            .filter(Column::IsAvailable.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch available dishes: {}", e);
                CoreError::InternalServerError
            })?;

        self.hydrate(models).await
    }

    async fn restaurant_ids_using_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> Result<Vec<Uuid>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT DISTINCT c.restaurant_id AS restaurant_id
            FROM dish_ingredients di
            INNER JOIN dishes d ON d.id = di.dish_id
            INNER JOIN menu_categories c ON c.id = d.category_id
            WHERE di.ingredient_id = $1
            "#,
            [ingredient_id.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to find restaurants using ingredient: {}", e);
            CoreError::InternalServerError
        })?;

        rows.iter()
            .map(|row| {
                row.try_get::<Uuid>("", "restaurant_id").map_err(|e| {
                    error!("Failed to read restaurant id: {}", e);
                    CoreError::InternalServerError
                })
            })
            .collect()
    }

    async fn create_dish(&self, dish: Dish) -> Result<Dish, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Entity::insert(Self::active_model(&dish))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create dish: {}", e);
                CoreError::InternalServerError
            })?;
        Self::replace_links(&txn, &dish).await?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit dish: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(dish)
    }

    async fn update_dish(&self, dish: Dish) -> Result<Dish, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Self::active_model(&dish).update(&txn).await.map_err(|e| {
            error!("Failed to update dish: {}", e);
            CoreError::InternalServerError
        })?;
        Self::replace_links(&txn, &dish).await?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit dish: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(dish)
    }

    async fn delete_dish(&self, dish_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(dish_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete dish: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
