//! Endpoint for listing users.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    user::{User, get_all_users},
};

/// Respond with every user.
pub async fn list_users_endpoint(State(state): State<AppState>) -> Result<Json<Vec<User>>, Error> {
    Ok(Json(get_all_users(&*state.lock_store()?)))
}
