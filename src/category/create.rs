//! Category creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    category::{Category, CategoryForm, create_category},
    payload::{Payload, require_name},
};

/// Handle category creation. Responds with the new category and 201 Created.
pub async fn create_category_endpoint(
    State(state): State<AppState>,
    Payload(form): Payload<CategoryForm>,
) -> Result<(StatusCode, Json<Category>), Error> {
    let name = require_name(form.name.as_ref())?;
    let category = create_category(name, &mut *state.lock_store()?);

    tracing::debug!("Created category {}", category.id);

    Ok((StatusCode::CREATED, Json(category)))
}
