use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_category::{
        entities::{CategorySummary, MenuCategory},
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MenuCategoryService: Send + Sync {
    /// Categories of one restaurant, lowest `display_order` first.
    fn get_categories(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CategorySummary>, CoreError>> + Send;

    fn get_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<CategorySummary, CoreError>> + Send;

    fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> impl Future<Output = Result<MenuCategory, CoreError>> + Send;

    fn update_category(
        &self,
        input: UpdateCategoryInput,
    ) -> impl Future<Output = Result<MenuCategory, CoreError>> + Send;

    fn delete_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MenuCategoryRepository: Send + Sync {
    fn fetch_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CategorySummary>, CoreError>> + Send;

    fn get_by_id(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Option<MenuCategory>, CoreError>> + Send;

    fn get_summary_by_id(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Option<CategorySummary>, CoreError>> + Send;

    fn create_category(
        &self,
        category: MenuCategory,
    ) -> impl Future<Output = Result<MenuCategory, CoreError>> + Send;

    fn update_category(
        &self,
        category: MenuCategory,
    ) -> impl Future<Output = Result<MenuCategory, CoreError>> + Send;

    /// Removes the category and its dishes.
    fn delete_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
