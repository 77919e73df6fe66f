//! Store operations for expense records.

use time::{OffsetDateTime, UtcOffset};

use crate::{
    Error, Store,
    category::get_category,
    record::{NewRecord, Record, RecordFilter, RecordId},
    user::get_user,
};

/// Create a record and return it with its generated ID.
///
/// `created_at` is normally the current time. It is stored in UTC with
/// microsecond precision, the precision it is serialized with. If it is earlier than the
/// previous record's creation time (the clock stepped backwards), the previous
/// time is used instead so that creation times never decrease.
///
/// # Errors
///
/// This function will return an error and store nothing if:
/// - `user_id` does not refer to an existing user ([Error::InvalidUser]),
/// - `category_id` does not refer to an existing category ([Error::InvalidCategory]).
pub fn create_record(
    new_record: NewRecord,
    created_at: OffsetDateTime,
    store: &mut Store,
) -> Result<Record, Error> {
    let NewRecord {
        user_id,
        category_id,
        amount,
    } = new_record;

    get_user(user_id, store).map_err(|_| Error::InvalidUser(user_id))?;
    get_category(category_id, store).map_err(|_| Error::InvalidCategory(category_id))?;

    let created_at = to_stored_precision(created_at);
    let created_at = match store.last_record_time {
        Some(last) if last > created_at => last,
        _ => created_at,
    };
    store.last_record_time = Some(created_at);

    Ok(store.records.insert_with(|id| Record {
        id,
        user_id,
        category_id,
        amount,
        created_at,
    }))
}

fn to_stored_precision(time: OffsetDateTime) -> OffsetDateTime {
    let time = time.to_offset(UtcOffset::UTC);

    time.replace_nanosecond(time.microsecond() * 1_000)
        .unwrap_or(time)
}

/// Retrieve a single record by ID.
pub fn get_record(record_id: RecordId, store: &Store) -> Result<Record, Error> {
    store.records.get(record_id).cloned().ok_or(Error::NotFound)
}

/// Retrieve the records that pass `filter`, ordered by ID.
///
/// An empty filter returns every record.
pub fn get_records(filter: RecordFilter, store: &Store) -> Vec<Record> {
    store
        .records
        .rows()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Delete a record by ID. Returns an error if the record doesn't exist.
pub fn delete_record(record_id: RecordId, store: &mut Store) -> Result<(), Error> {
    if store.records.remove(record_id) {
        Ok(())
    } else {
        Err(Error::DeleteMissingRecord)
    }
}
