//! User creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    payload::{Payload, require_name},
    user::{User, UserForm, create_user},
};

/// Handle user creation. Responds with the new user and 201 Created.
pub async fn create_user_endpoint(
    State(state): State<AppState>,
    Payload(form): Payload<UserForm>,
) -> Result<(StatusCode, Json<User>), Error> {
    let name = require_name(form.name.as_ref())?;
    let user = create_user(name, &mut *state.lock_store()?);

    tracing::debug!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}
