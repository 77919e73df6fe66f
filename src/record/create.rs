//! Record creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    payload::Payload,
    record::{NewRecord, Record, RecordForm, create_record},
};

/// Handle record creation. Responds with the new record and 201 Created.
///
/// Responds with 400 if a field is missing or not numeric and 404 if the
/// referenced user or category does not exist.
pub async fn create_record_endpoint(
    State(state): State<AppState>,
    Payload(form): Payload<RecordForm>,
) -> Result<(StatusCode, Json<Record>), Error> {
    let new_record = NewRecord::try_from(form)?;

    let record = create_record(
        new_record,
        OffsetDateTime::now_utc(),
        &mut *state.lock_store()?,
    )
    .inspect_err(|error| tracing::debug!("Could not create record: {error}"))?;

    tracing::debug!("Created record {}", record.id);

    Ok((StatusCode::CREATED, Json(record)))
}
