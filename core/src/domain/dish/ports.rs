use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        value_objects::{PageRequest, Paginated},
    },
    dish::{
        entities::{Dish, DishView},
        value_objects::{CreateDishInput, SafeDishQuery, UpdateDishInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait DishService: Send + Sync {
    fn get_dish_view(&self, dish_id: Uuid)
    -> impl Future<Output = Result<DishView, CoreError>> + Send;

    fn get_dishes_by_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Vec<DishView>, CoreError>> + Send;

    /// One page of the full menu, unavailable dishes included. Cached per
    /// restaurant and page number.
    fn get_menu_page(
        &self,
        restaurant_id: Uuid,
        request: PageRequest,
    ) -> impl Future<Output = Result<Paginated<DishView>, CoreError>> + Send;

    /// Available dishes free of every excluded allergen. Cached per
    /// restaurant and excluded set.
    fn get_safe_dishes(
        &self,
        query: SafeDishQuery,
    ) -> impl Future<Output = Result<Vec<DishView>, CoreError>> + Send;

    fn get_vegetarian_dishes(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<DishView>, CoreError>> + Send;

    fn get_vegan_dishes(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<DishView>, CoreError>> + Send;

    fn create_dish(
        &self,
        input: CreateDishInput,
    ) -> impl Future<Output = Result<DishView, CoreError>> + Send;

    fn update_dish(
        &self,
        input: UpdateDishInput,
    ) -> impl Future<Output = Result<DishView, CoreError>> + Send;

    fn delete_dish(&self, dish_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn toggle_availability(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<DishView, CoreError>> + Send;
}

/// Dishes are always returned with their ingredients materialized, ordered
/// by category display order then dish id.
#[cfg_attr(test, mockall::automock)]
pub trait DishRepository: Send + Sync {
    fn get_by_id(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    fn fetch_by_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn fetch_menu_page(
        &self,
        restaurant_id: Uuid,
        request: PageRequest,
    ) -> impl Future<Output = Result<Paginated<Dish>, CoreError>> + Send;

    fn fetch_available_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    /// Distinct restaurants owning a dish that uses the ingredient.
    fn restaurant_ids_using_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Uuid>, CoreError>> + Send;

    fn create_dish(&self, dish: Dish) -> impl Future<Output = Result<Dish, CoreError>> + Send;

    fn update_dish(&self, dish: Dish) -> impl Future<Output = Result<Dish, CoreError>> + Send;

    fn delete_dish(&self, dish_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
