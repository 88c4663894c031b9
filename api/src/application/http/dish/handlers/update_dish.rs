use axum::extract::{Path, State};
use safemenu_core::domain::dish::{
    entities::DishView, ports::DishService, value_objects::UpdateDishInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

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
pub struct UpdateDishResponse {
    pub data: DishView,
}

#[utoipa::path(
    put,
    path = "/dishes/{dish_id}",
    tag = "dish",
    summary = "Update dish",
    description = "Replaces the dish fields and its ingredient list. The dish may move to another category.",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    request_body = DishValidator,
    responses(
        (status = 200, body = UpdateDishResponse),
        (status = 400, description = "One or more ingredients could not be resolved"),
        (status = 404, description = "Dish or category not found")
    ),
)]
pub async fn update_dish(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DishValidator>,
) -> Result<Response<UpdateDishResponse>, ApiError> {
    let dish = state
        .service
        .update_dish(UpdateDishInput {
            dish_id,
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

    Ok(Response::OK(UpdateDishResponse { data: dish }))
}
