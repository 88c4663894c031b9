use axum::extract::{Path, State};
use safemenu_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteRestaurantResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/restaurants/{restaurant_id}",
    tag = "restaurant",
    summary = "Delete restaurant",
    description = "Deletes the restaurant with its categories and dishes.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = DeleteRestaurantResponse),
        (status = 404, description = "Restaurant not found")
    ),
)]
pub async fn delete_restaurant(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRestaurantResponse>, ApiError> {
    state
        .service
        .delete_restaurant(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRestaurantResponse {
        message: "Restaurant deleted successfully".to_string(),
    }))
}
