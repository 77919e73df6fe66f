//! Record deletion endpoint.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    payload::IdPath,
    record::delete_record,
    routing::Message,
};

/// Handle record deletion.
pub async fn delete_record_endpoint(
    IdPath(record_id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<Message>, Error> {
    delete_record(record_id, &mut *state.lock_store()?)?;

    tracing::debug!("Deleted record {record_id}");

    Ok(Json(Message::new(format!("Record {record_id} deleted"))))
}
