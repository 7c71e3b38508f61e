use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::users::use_cases::create_user::inbound::http as create_http;
use crate::modules::users::use_cases::get_user::inbound::http as get_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_http::handle).get(list_http::handle))
        .route("/users/{id}", get(get_http::handle))
        .with_state(state)
}
