use axum::extract::State;
use safemenu_core::domain::restaurant::{entities::RestaurantSummary, ports::RestaurantService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRestaurantsResponse {
    pub data: Vec<RestaurantSummary>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurant",
    summary = "List restaurants",
    description = "Lists every restaurant with its category and dish counts, ordered by name.",
    responses(
        (status = 200, body = GetRestaurantsResponse)
    ),
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
) -> Result<Response<GetRestaurantsResponse>, ApiError> {
    let restaurants = state
        .service
        .get_restaurants()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRestaurantsResponse { data: restaurants }))
}
