use axum::extract::State;
use safemenu_core::domain::dish::{
    entities::DishView, ports::DishService, value_objects::CreateDishInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    dish::validators::DishValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateDishResponse {
    pub data: DishView,
}

#[utoipa::path(
    post,
    path = "/dishes",
    tag = "dish",
    summary = "Create dish",
    request_body = DishValidator,
    responses(
        (status = 201, body = CreateDishResponse),
        (status = 400, description = "One or more ingredients could not be resolved"),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Invalid payload")
    ),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DishValidator>,
) -> Result<Response<CreateDishResponse>, ApiError> {
    let dish = state
        .service
        .create_dish(CreateDishInput {
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            price_cents: payload.price_cents,
            is_available: payload.is_available,
            is_vegetarian: payload.is_vegetarian,
            is_vegan: payload.is_vegan,
            ingredient_ids: payload.ingredient_ids,
        })
        .await?;

    Ok(Response::Created(CreateDishResponse { data: dish }))
}
