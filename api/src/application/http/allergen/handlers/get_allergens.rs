use axum::extract::State;
use safemenu_core::domain::allergen::entities::{Allergen, AllergenInfo};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergensResponse {
    pub data: Vec<AllergenInfo>,
}

#[utoipa::path(
    get,
    path = "/allergens",
    tag = "allergen",
    summary = "List allergens",
    description = "Returns the 14 regulated allergens with their stable identifiers, display names and descriptions.",
    responses(
        (status = 200, body = GetAllergensResponse)
    ),
)]
pub async fn get_allergens(
    State(_state): State<AppState>,
) -> Result<Response<GetAllergensResponse>, ApiError> {
    Ok(Response::OK(GetAllergensResponse {
        data: Allergen::catalog(),
    }))
}
