use axum::extract::{Path, State};
use safemenu_core::domain::dish::ports::DishService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteDishResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/dishes/{dish_id}",
    tag = "dish",
    summary = "Delete dish",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, body = DeleteDishResponse),
        (status = 404, description = "Dish not found")
    ),
)]
pub async fn delete_dish(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteDishResponse>, ApiError> {
    state.service.delete_dish(dish_id).await?;

    Ok(Response::OK(DeleteDishResponse {
        message: "Dish deleted successfully".to_string(),
    }))
}
