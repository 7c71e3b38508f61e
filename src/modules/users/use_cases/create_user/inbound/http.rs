use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::users::core::model::User;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Json(user): Json<User>) -> impl IntoResponse {
    let created = state.users.create(user).await;
    (StatusCode::CREATED, Json(created))
}
