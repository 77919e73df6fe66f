//! Endpoint for listing categories.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    category::{Category, get_all_categories},
};

/// Respond with every category.
pub async fn list_categories_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, Error> {
    Ok(Json(get_all_categories(&*state.lock_store()?)))
}
