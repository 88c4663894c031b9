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
pub struct GetCategoryDishesResponse {
    pub data: Vec<DishView>,
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/dishes",
    tag = "dish",
    summary = "List dishes of a category",
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = GetCategoryDishesResponse),
        (status = 404, description = "Category not found")
    ),
)]
pub async fn get_category_dishes(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCategoryDishesResponse>, ApiError> {
    let dishes = state.service.get_dishes_by_category(category_id).await?;

    Ok(Response::OK(GetCategoryDishesResponse { data: dishes }))
}
