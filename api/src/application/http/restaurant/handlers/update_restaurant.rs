use axum::extract::{Path, State};
use safemenu_core::domain::restaurant::{
    entities::RestaurantSummary, ports::RestaurantService, value_objects::UpdateRestaurantInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    restaurant::validators::UpdateRestaurantValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateRestaurantResponse {
    pub data: RestaurantSummary,
}

#[utoipa::path(
    put,
    path = "/restaurants/{restaurant_id}",
    tag = "restaurant",
    summary = "Update restaurant",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    request_body = UpdateRestaurantValidator,
    responses(
        (status = 200, body = UpdateRestaurantResponse),
        (status = 404, description = "Restaurant not found")
    ),
)]
pub async fn update_restaurant(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateRestaurantValidator>,
) -> Result<Response<UpdateRestaurantResponse>, ApiError> {
    let restaurant = state
        .service
        .update_restaurant(UpdateRestaurantInput {
            restaurant_id,
            name: payload.name,
            address: payload.address,
            phone: payload.phone,
            email: payload.email,
            description: payload.description,
            is_active: payload.is_active,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRestaurantResponse { data: restaurant }))
}
