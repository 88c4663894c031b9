use axum::extract::{Path, Query, State};
use safemenu_core::domain::{
    common::value_objects::{PageRequest, Paginated},
    dish::{entities::DishView, ports::DishService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    dish::validators::MenuPageQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuResponse {
    pub data: Paginated<DishView>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/menu",
    tag = "dish",
    summary = "Get a page of the menu",
    description = "Dishes ordered by category display order. Pages are zero-based.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default: 20, max: 100)"),
    ),
    responses(
        (status = 200, body = GetMenuResponse),
        (status = 400, description = "Invalid page size"),
        (status = 404, description = "Restaurant not found")
    ),
)]
pub async fn get_menu(
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<MenuPageQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let request = PageRequest::new(query.page, query.size)?;
    let page = state.service.get_menu_page(restaurant_id, request).await?;

    Ok(Response::OK(GetMenuResponse { data: page }))
}
