use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::{Restaurant, RestaurantSummary},
        value_objects::{CreateRestaurantInput, UpdateRestaurantInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantService: Send + Sync {
    fn get_restaurants(&self)
    -> impl Future<Output = Result<Vec<RestaurantSummary>, CoreError>> + Send;

    fn get_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<RestaurantSummary, CoreError>> + Send;

    fn create_restaurant(
        &self,
        input: CreateRestaurantInput,
    ) -> impl Future<Output = Result<RestaurantSummary, CoreError>> + Send;

    fn update_restaurant(
        &self,
        input: UpdateRestaurantInput,
    ) -> impl Future<Output = Result<RestaurantSummary, CoreError>> + Send;

    fn delete_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantRepository: Send + Sync {
    fn fetch_restaurants(
        &self,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, CoreError>> + Send;

    fn get_by_id(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Option<Restaurant>, CoreError>> + Send;

    fn get_summary_by_id(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Option<RestaurantSummary>, CoreError>> + Send;

    fn create_restaurant(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn update_restaurant(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    /// Removes the restaurant with its categories and dishes.
    fn delete_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
