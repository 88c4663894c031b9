use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_restaurant::{__path_create_restaurant, create_restaurant};
use super::handlers::delete_restaurant::{__path_delete_restaurant, delete_restaurant};
use super::handlers::get_restaurant::{__path_get_restaurant, get_restaurant};
use super::handlers::get_restaurants::{__path_get_restaurants, get_restaurants};
use super::handlers::update_restaurant::{__path_update_restaurant, update_restaurant};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_restaurants,
    get_restaurant,
    create_restaurant,
    update_restaurant,
    delete_restaurant
))]
pub struct RestaurantApiDoc;

pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/restaurants"), get(get_restaurants))
        .route(&format!("{root_path}/restaurants"), post(create_restaurant))
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}"),
            get(get_restaurant),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}"),
            put(update_restaurant),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}"),
            delete(delete_restaurant),
        )
}
