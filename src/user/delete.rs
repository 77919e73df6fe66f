//! User deletion endpoint.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    payload::IdPath,
    routing::Message,
    user::delete_user,
};

/// Handle user deletion. Records referencing the user are kept.
pub async fn delete_user_endpoint(
    IdPath(user_id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<Message>, Error> {
    delete_user(user_id, &mut *state.lock_store()?)?;

    tracing::debug!("Deleted user {user_id}");

    Ok(Json(Message::new(format!("User {user_id} deleted"))))
}
