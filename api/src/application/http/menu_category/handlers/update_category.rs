use axum::extract::{Path, State};
use safemenu_core::domain::menu_category::{
    entities::MenuCategory, ports::MenuCategoryService, value_objects::UpdateCategoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    menu_category::validators::CategoryValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCategoryResponse {
    pub data: MenuCategory,
}

#[utoipa::path(
    put,
    path = "/categories/{category_id}",
    tag = "menu_category",
    summary = "Update category",
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    request_body = CategoryValidator,
    responses(
        (status = 200, body = UpdateCategoryResponse),
        (status = 404, description = "Category not found")
    ),
)]
pub async fn update_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CategoryValidator>,
) -> Result<Response<UpdateCategoryResponse>, ApiError> {
    let category = state
        .service
        .update_category(UpdateCategoryInput {
            category_id,
            name: payload.name,
            description: payload.description,
            display_order: payload.display_order,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCategoryResponse { data: category }))
}
