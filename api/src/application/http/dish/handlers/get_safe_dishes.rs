use axum::extract::{Path, State};
use safemenu_core::domain::dish::{
    entities::DishView, ports::DishService, value_objects::SafeDishQuery,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    query_extractor::AllergenExclusion,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSafeDishesResponse {
    pub data: Vec<DishView>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/dishes/safe",
    tag = "dish",
    summary = "List dishes safe for a set of allergies",
    description = "Available dishes whose derived allergens share nothing with the excluded set. With no exclusion, every available dish is returned.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        ("exclude" = Option<String>, Query, description = "Comma-separated allergen identifiers, e.g. MILK,NUTS"),
    ),
    responses(
        (status = 200, body = GetSafeDishesResponse),
        (status = 400, description = "Unknown allergen identifier"),
        (status = 404, description = "Restaurant not found")
    ),
)]
pub async fn get_safe_dishes(
    Path(restaurant_id): Path<Uuid>,
    AllergenExclusion(excluded): AllergenExclusion,
    State(state): State<AppState>,
) -> Result<Response<GetSafeDishesResponse>, ApiError> {
    let dishes = state
        .service
        .get_safe_dishes(SafeDishQuery {
            restaurant_id,
            excluded,
        })
        .await?;

    Ok(Response::OK(GetSafeDishesResponse { data: dishes }))
}
