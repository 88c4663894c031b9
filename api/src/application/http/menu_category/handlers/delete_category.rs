use axum::extract::{Path, State};
use safemenu_core::domain::menu_category::ports::MenuCategoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCategoryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = "menu_category",
    summary = "Delete category",
    description = "Deletes the category together with its dishes.",
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = DeleteCategoryResponse),
        (status = 404, description = "Category not found")
    ),
)]
pub async fn delete_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCategoryResponse>, ApiError> {
    state
        .service
        .delete_category(category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCategoryResponse {
        message: "Category deleted successfully".to_string(),
    }))
}
