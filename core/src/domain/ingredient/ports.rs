use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        value_objects::{CreateIngredientInput, UpdateIngredientInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn get_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn search_ingredients(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Resolves every id or fails with the ids that did not resolve.
    fn get_ingredients_by_ids(
        &self,
        ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        input: CreateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// All ingredients ordered by name.
    fn fetch_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    /// Returns the ingredients that exist among `ids`; missing ids are skipped.
    fn get_by_ids(
        &self,
        ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Case-insensitive exact name match.
    fn find_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    /// Case-insensitive substring match on the name.
    fn search_by_name(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
