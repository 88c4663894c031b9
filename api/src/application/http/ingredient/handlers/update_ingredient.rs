use axum::extract::{Path, State};
use safemenu_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::UpdateIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    ingredient::validators::IngredientValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    put,
    path = "/ingredients/{ingredient_id}",
    tag = "ingredient",
    summary = "Update ingredient",
    description = "Replaces the ingredient's name, description and allergen tags. Cached views of every restaurant serving a dish with this ingredient are evicted.",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    request_body = IngredientValidator,
    responses(
        (status = 200, body = UpdateIngredientResponse),
        (status = 404, description = "Ingredient not found"),
        (status = 409, description = "An ingredient with this name already exists")
    ),
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IngredientValidator>,
) -> Result<Response<UpdateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .update_ingredient(UpdateIngredientInput {
            ingredient_id,
            name: payload.name,
            description: payload.description,
            allergens: payload.allergens,
        })
        .await?;

    Ok(Response::OK(UpdateIngredientResponse { data: ingredient }))
}
