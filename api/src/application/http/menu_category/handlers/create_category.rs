use axum::extract::{Path, State};
use safemenu_core::domain::menu_category::{
    entities::MenuCategory, ports::MenuCategoryService, value_objects::CreateCategoryInput,
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
pub struct CreateCategoryResponse {
    pub data: MenuCategory,
}

#[utoipa::path(
    post,
    path = "/restaurants/{restaurant_id}/categories",
    tag = "menu_category",
    summary = "Create category",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    request_body = CategoryValidator,
    responses(
        (status = 201, body = CreateCategoryResponse),
        (status = 404, description = "Restaurant not found"),
        (status = 422, description = "Invalid payload")
    ),
)]
pub async fn create_category(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CategoryValidator>,
) -> Result<Response<CreateCategoryResponse>, ApiError> {
    let category = state
        .service
        .create_category(CreateCategoryInput {
            restaurant_id,
            name: payload.name,
            description: payload.description,
            display_order: payload.display_order,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCategoryResponse { data: category }))
}
