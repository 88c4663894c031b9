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
pub struct GetDishResponse {
    pub data: DishView,
}

#[utoipa::path(
    get,
    path = "/dishes/{dish_id}",
    tag = "dish",
    summary = "Get dish",
    description = "Returns the dish with its ingredients and the allergens derived from them.",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, body = GetDishResponse),
        (status = 404, description = "Dish not found")
    ),
)]
pub async fn get_dish(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetDishResponse>, ApiError> {
    let dish = state.service.get_dish_view(dish_id).await?;

    Ok(Response::OK(GetDishResponse { data: dish }))
}
