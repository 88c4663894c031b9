use axum::extract::{Path, State};
use safemenu_core::domain::menu_category::{entities::CategorySummary, ports::MenuCategoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoriesResponse {
    pub data: Vec<CategorySummary>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/categories",
    tag = "menu_category",
    summary = "List categories of a restaurant",
    description = "Categories ordered by display order.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = GetCategoriesResponse),
        (status = 404, description = "Restaurant not found")
    ),
)]
pub async fn get_categories(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCategoriesResponse>, ApiError> {
    let categories = state
        .service
        .get_categories(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCategoriesResponse { data: categories }))
}
