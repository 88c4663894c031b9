use axum::extract::{Path, State};
use safemenu_core::domain::dish::{entities::DishView, ports::DishService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleAvailabilityResponse {
    pub data: DishView,
}

#[utoipa::path(
    patch,
    path = "/dishes/{dish_id}/availability",
    tag = "dish",
    summary = "Toggle dish availability",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, body = ToggleAvailabilityResponse),
        (status = 404, description = "Dish not found")
    ),
)]
pub async fn toggle_availability(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ToggleAvailabilityResponse>, ApiError> {
    let dish = state.service.toggle_availability(dish_id).await?;

    Ok(Response::OK(ToggleAvailabilityResponse { data: dish }))
}
