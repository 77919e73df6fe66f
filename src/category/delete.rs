//! Category deletion endpoint.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    category::{DeleteCategoryForm, delete_category},
    payload::{Payload, require_integer},
    routing::Message,
};

/// Handle category deletion.
///
/// The category ID is read from the JSON body (`{"id": 1}`), not the path.
/// Records in the category are kept.
pub async fn delete_category_endpoint(
    State(state): State<AppState>,
    Payload(form): Payload<DeleteCategoryForm>,
) -> Result<Json<Message>, Error> {
    let category_id = require_integer("id", form.id.as_ref())?;

    delete_category(category_id, &mut *state.lock_store()?)?;

    tracing::debug!("Deleted category {category_id}");

    Ok(Json(Message::new(format!("Category {category_id} deleted"))))
}
