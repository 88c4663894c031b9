use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_category::{__path_create_category, create_category};
use super::handlers::delete_category::{__path_delete_category, delete_category};
use super::handlers::get_categories::{__path_get_categories, get_categories};
use super::handlers::get_category::{__path_get_category, get_category};
use super::handlers::update_category::{__path_update_category, update_category};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_categories,
    get_category,
    create_category,
    update_category,
    delete_category
))]
pub struct MenuCategoryApiDoc;

pub fn menu_category_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/categories"),
            get(get_categories),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/categories"),
            post(create_category),
        )
        .route(
            &format!("{root_path}/categories/{{category_id}}"),
            get(get_category),
        )
        .route(
            &format!("{root_path}/categories/{{category_id}}"),
            put(update_category),
        )
        .route(
            &format!("{root_path}/categories/{{category_id}}"),
            delete(delete_category),
        )
}
