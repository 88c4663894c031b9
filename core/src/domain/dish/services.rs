use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::{
    allergen::services::find_safe,
    common::{
        entities::app_errors::CoreError,
        services::Service,
        value_objects::{PageRequest, Paginated},
    },
    derived_view::{
        entities::{CachedView, DerivedViewKey},
        ports::DerivedViewCache,
    },
    dish::{
        entities::{Dish, DishView},
        ports::{DishRepository, DishService},
        value_objects::{CreateDishInput, SafeDishQuery, UpdateDishInput},
    },
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    menu_category::{entities::MenuCategory, ports::MenuCategoryRepository},
    restaurant::ports::RestaurantRepository,
};

impl<R, MC, I, D, DC, HC> Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    async fn ensure_restaurant(&self, restaurant_id: Uuid) -> Result<(), CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::restaurant_not_found(restaurant_id))?;
        Ok(())
    }

    async fn require_category(&self, category_id: Uuid) -> Result<MenuCategory, CoreError> {
        self.category_repository
            .get_by_id(category_id)
            .await?
            .ok_or(CoreError::category_not_found(category_id))
    }

    async fn require_dish(&self, dish_id: Uuid) -> Result<Dish, CoreError> {
        self.dish_repository
            .get_by_id(dish_id)
            .await?
            .ok_or(CoreError::dish_not_found(dish_id))
    }

    async fn available_views<F>(&self, restaurant_id: Uuid, keep: F) -> Result<Vec<DishView>, CoreError>
    where
        F: Fn(&Dish) -> bool + Send,
    {
        self.ensure_restaurant(restaurant_id).await?;

        let dishes = self
            .dish_repository
            .fetch_available_by_restaurant(restaurant_id)
            .await?;

        Ok(dishes.iter().filter(|dish| keep(dish)).map(DishView::from).collect())
    }
}

impl<R, MC, I, D, DC, HC> DishService for Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_dish_view(&self, dish_id: Uuid) -> Result<DishView, CoreError> {
        let dish = self.require_dish(dish_id).await?;
        Ok(DishView::from(dish))
    }

    #[instrument(skip(self))]
    async fn get_dishes_by_category(&self, category_id: Uuid) -> Result<Vec<DishView>, CoreError> {
        self.require_category(category_id).await?;

        let dishes = self.dish_repository.fetch_by_category(category_id).await?;
        Ok(dishes.iter().map(DishView::from).collect())
    }

    #[instrument(skip(self, request), fields(page = request.page, size = request.size))]
    async fn get_menu_page(
        &self,
        restaurant_id: Uuid,
        request: PageRequest,
    ) -> Result<Paginated<DishView>, CoreError> {
        let key = DerivedViewKey::menu_page(restaurant_id, request.page);
        if let Some(CachedView::MenuPage(page)) = self.view_cache.get(&key) {
            return Ok(page);
        }

        let generation = self.view_cache.generation(restaurant_id);
        self.ensure_restaurant(restaurant_id).await?;

        let page = self
            .dish_repository
            .fetch_menu_page(restaurant_id, request)
            .await?
            .map(DishView::from);

        self.view_cache
            .put_if_current(key, CachedView::MenuPage(page.clone()), generation);

        Ok(page)
    }

    #[instrument(skip(self, query), fields(restaurant_id = %query.restaurant_id, excluded = query.excluded.len()))]
    async fn get_safe_dishes(&self, query: SafeDishQuery) -> Result<Vec<DishView>, CoreError> {
        let key = DerivedViewKey::safe_dishes(query.restaurant_id, &query.excluded);
        if let Some(CachedView::SafeDishes(views)) = self.view_cache.get(&key) {
            return Ok(views);
        }

        let generation = self.view_cache.generation(query.restaurant_id);
        self.ensure_restaurant(query.restaurant_id).await?;

        let dishes = self
            .dish_repository
            .fetch_available_by_restaurant(query.restaurant_id)
            .await?;
        let candidates = dishes.len();

        let views: Vec<DishView> = find_safe(dishes, &query.excluded)
            .iter()
            .map(DishView::from)
            .collect();

        debug!(candidates, safe = views.len(), key = %key, "safe dishes computed");

        self.view_cache
            .put_if_current(key, CachedView::SafeDishes(views.clone()), generation);

        Ok(views)
    }

    #[instrument(skip(self))]
    async fn get_vegetarian_dishes(&self, restaurant_id: Uuid) -> Result<Vec<DishView>, CoreError> {
        self.available_views(restaurant_id, |dish| dish.is_vegetarian)
            .await
    }

    #[instrument(skip(self))]
    async fn get_vegan_dishes(&self, restaurant_id: Uuid) -> Result<Vec<DishView>, CoreError> {
        self.available_views(restaurant_id, |dish| dish.is_vegan)
            .await
    }

    #[instrument(skip(self, input), fields(category_id = %input.category_id))]
    async fn create_dish(&self, input: CreateDishInput) -> Result<DishView, CoreError> {
        let category = self.require_category(input.category_id).await?;
        let ingredients = self.resolve_ingredients(&input.ingredient_ids).await?;

        let dish = Dish::new((&input).into(), &category, ingredients);
        let created = self.dish_repository.create_dish(dish).await?;
        self.view_cache.invalidate_restaurant(created.restaurant_id);

        info!(dish_id = %created.id, restaurant_id = %created.restaurant_id, "dish created");

        Ok(DishView::from(created))
    }

    #[instrument(skip(self, input), fields(dish_id = %input.dish_id))]
    async fn update_dish(&self, input: UpdateDishInput) -> Result<DishView, CoreError> {
        let mut dish = self.require_dish(input.dish_id).await?;
        let previous_restaurant = dish.restaurant_id;

        let category = self.require_category(input.category_id).await?;
        let ingredients = self.resolve_ingredients(&input.ingredient_ids).await?;

        dish.update((&input).into(), &category, ingredients);

        let updated = self.dish_repository.update_dish(dish).await?;
        self.view_cache.invalidate_restaurant(updated.restaurant_id);
        if previous_restaurant != updated.restaurant_id {
            self.view_cache.invalidate_restaurant(previous_restaurant);
        }

        Ok(DishView::from(updated))
    }

    #[instrument(skip(self))]
    async fn delete_dish(&self, dish_id: Uuid) -> Result<(), CoreError> {
        let dish = self.require_dish(dish_id).await?;

        self.dish_repository.delete_dish(dish_id).await?;
        self.view_cache.invalidate_restaurant(dish.restaurant_id);

        info!(%dish_id, "dish deleted");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_availability(&self, dish_id: Uuid) -> Result<DishView, CoreError> {
        let mut dish = self.require_dish(dish_id).await?;
        dish.toggle_availability();

        let updated = self.dish_repository.update_dish(dish).await?;
        self.view_cache.invalidate_restaurant(updated.restaurant_id);

        info!(%dish_id, is_available = updated.is_available, "dish availability toggled");

        Ok(DishView::from(updated))
    }
}
