use axum::extract::State;
use safemenu_core::domain::restaurant::{
    entities::RestaurantSummary, ports::RestaurantService, value_objects::CreateRestaurantInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    restaurant::validators::CreateRestaurantValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRestaurantResponse {
    pub data: RestaurantSummary,
}

#[utoipa::path(
    post,
    path = "/restaurants",
    tag = "restaurant",
    summary = "Create restaurant",
    request_body = CreateRestaurantValidator,
    responses(
        (status = 201, body = CreateRestaurantResponse),
        (status = 422, description = "Invalid payload")
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRestaurantValidator>,
) -> Result<Response<CreateRestaurantResponse>, ApiError> {
    let restaurant = state
        .service
        .create_restaurant(CreateRestaurantInput {
            name: payload.name,
            address: payload.address,
            phone: payload.phone,
            email: payload.email,
            description: payload.description,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRestaurantResponse { data: restaurant }))
}
