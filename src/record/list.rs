//! Endpoint for listing records by user and/or category.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{
    AppState, Error,
    record::{Record, RecordFilter, RecordQuery, get_records},
};

/// Respond with the records matching the `user_id` and/or `category_id`
/// query parameters.
///
/// At least one of the parameters is required.
pub async fn list_records_endpoint(
    State(state): State<AppState>,
    query: Result<Query<RecordQuery>, QueryRejection>,
) -> Result<Json<Vec<Record>>, Error> {
    let Query(query) = query.map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;
    let filter = RecordFilter::try_from(query)?;

    if filter.is_empty() {
        return Err(Error::MissingFilter);
    }

    Ok(Json(get_records(filter, &*state.lock_store()?)))
}
