use axum::extract::State;
use safemenu_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::CreateIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "ingredient",
    summary = "Create ingredient",
    request_body = IngredientValidator,
    responses(
        (status = 201, body = CreateIngredientResponse),
        (status = 409, description = "An ingredient with this name already exists"),
        (status = 422, description = "Invalid payload or unknown allergen")
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IngredientValidator>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .create_ingredient(CreateIngredientInput {
            name: payload.name,
            description: payload.description,
            allergens: payload.allergens,
        })
        .await?;

    Ok(Response::Created(CreateIngredientResponse { data: ingredient }))
}
