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
pub struct GetVeganDishesResponse {
    pub data: Vec<DishView>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/dishes/vegan",
    tag = "dish",
    summary = "List available vegan dishes",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = GetVeganDishesResponse),
        (status = 404, description = "Restaurant not found")
    ),
)]
pub async fn get_vegan_dishes(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetVeganDishesResponse>, ApiError> {
    let dishes = state.service.get_vegan_dishes(restaurant_id).await?;

    Ok(Response::OK(GetVeganDishesResponse { data: dishes }))
}
