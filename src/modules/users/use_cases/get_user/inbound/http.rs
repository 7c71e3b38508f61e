use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

// A miss is not an error: the body is `null` and the status stays 200.
pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    Json(state.users.find_one(&id).await)
}
