//! Endpoint for fetching a single user.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    payload::IdPath,
    user::{User, get_user},
};

/// Respond with the user whose ID is in the path, or 404 if there is none.
pub async fn get_user_endpoint(
    IdPath(user_id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<User>, Error> {
    get_user(user_id, &*state.lock_store()?).map(Json)
}
