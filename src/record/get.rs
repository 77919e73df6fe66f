//! Endpoint for fetching a single record.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    payload::IdPath,
    record::{Record, get_record},
};

/// Respond with the record whose ID is in the path, or 404 if there is none.
pub async fn get_record_endpoint(
    IdPath(record_id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<Record>, Error> {
    get_record(record_id, &*state.lock_store()?).map(Json)
}
