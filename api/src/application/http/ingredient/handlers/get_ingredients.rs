use axum::extract::{Query, State};
use safemenu_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::ListIngredientsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "ingredient",
    summary = "List or search ingredients",
    description = "Without `search`, lists every ingredient. With it, returns ingredients whose name contains the term, case-insensitively.",
    params(
        ("search" = Option<String>, Query, description = "Name fragment to search for"),
    ),
    responses(
        (status = 200, body = GetIngredientsResponse)
    ),
)]
pub async fn get_ingredients(
    Query(query): Query<ListIngredientsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let ingredients = match query.search {
        Some(term) => state.service.search_ingredients(term).await?,
        None => state.service.get_ingredients().await?,
    };

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
