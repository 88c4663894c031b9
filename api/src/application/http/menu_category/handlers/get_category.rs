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
pub struct GetCategoryResponse {
    pub data: CategorySummary,
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = "menu_category",
    summary = "Get category",
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = GetCategoryResponse),
        (status = 404, description = "Category not found")
    ),
)]
pub async fn get_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCategoryResponse>, ApiError> {
    let category = state
        .service
        .get_category(category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCategoryResponse { data: category }))
}
