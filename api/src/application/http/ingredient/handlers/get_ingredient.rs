use axum::extract::{Path, State};
use safemenu_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}",
    tag = "ingredient",
    summary = "Get ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = GetIngredientResponse),
        (status = 404, description = "Ingredient not found")
    ),
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientResponse>, ApiError> {
    let ingredient = state.service.get_ingredient(ingredient_id).await?;

    Ok(Response::OK(GetIngredientResponse { data: ingredient }))
}
