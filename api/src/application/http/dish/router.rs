use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_dish::{__path_create_dish, create_dish};
use super::handlers::delete_dish::{__path_delete_dish, delete_dish};
use super::handlers::get_category_dishes::{__path_get_category_dishes, get_category_dishes};
use super::handlers::get_dish::{__path_get_dish, get_dish};
use super::handlers::get_menu::{__path_get_menu, get_menu};
use super::handlers::get_safe_dishes::{__path_get_safe_dishes, get_safe_dishes};
use super::handlers::get_vegan_dishes::{__path_get_vegan_dishes, get_vegan_dishes};
use super::handlers::get_vegetarian_dishes::{
    __path_get_vegetarian_dishes, get_vegetarian_dishes,
};
use super::handlers::toggle_availability::{__path_toggle_availability, toggle_availability};
use super::handlers::update_dish::{__path_update_dish, update_dish};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_dish,
    create_dish,
    update_dish,
    delete_dish,
    toggle_availability,
    get_category_dishes,
    get_menu,
    get_safe_dishes,
    get_vegetarian_dishes,
    get_vegan_dishes
))]
pub struct DishApiDoc;

pub fn dish_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/dishes"), post(create_dish))
        .route(&format!("{root_path}/dishes/{{dish_id}}"), get(get_dish))
        .route(&format!("{root_path}/dishes/{{dish_id}}"), put(update_dish))
        .route(
            &format!("{root_path}/dishes/{{dish_id}}"),
            delete(delete_dish),
        )
        .route(
            &format!("{root_path}/dishes/{{dish_id}}/availability"),
            patch(toggle_availability),
        )
        .route(
            &format!("{root_path}/categories/{{category_id}}/dishes"),
            get(get_category_dishes),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/menu"),
            get(get_menu),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/dishes/safe"),
            get(get_safe_dishes),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/dishes/vegetarian"),
            get(get_vegetarian_dishes),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/dishes/vegan"),
            get(get_vegan_dishes),
        )
}
