//! Core record domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::{
    CategoryId, Error, UserId,
    payload::{require_integer, require_number},
};

/// Store identifier for an expense record.
pub type RecordId = i64;

// Fixed width so that timestamps sort as strings, e.g. "2026-01-01T00:00:00.500000+00:00".
time::serde::format_description!(
    created_at_format,
    OffsetDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory]:[offset_minute]"
);

/// An amount of money a user spent in a category.
///
/// `user_id` and `category_id` referred to existing entities when the record
/// was created, but may dangle after the user or category is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The ID assigned by the store, starting at 1.
    pub id: RecordId,
    /// The user who spent the money.
    pub user_id: UserId,
    /// The category the expense belongs to.
    pub category_id: CategoryId,
    /// The amount spent. Any sign and precision is accepted.
    pub amount: f64,
    /// When the record was created, in UTC with microsecond precision.
    ///
    /// Serialized as a fixed width ISO 8601 string.
    #[serde(with = "created_at_format")]
    pub created_at: OffsetDateTime,
}

/// The validated fields needed to create a [Record].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewRecord {
    /// The user who spent the money. Must exist when the record is created.
    pub user_id: UserId,
    /// The category of the expense. Must exist when the record is created.
    pub category_id: CategoryId,
    /// The amount spent.
    pub amount: f64,
}

/// JSON body for creating a record, before coercion.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecordForm {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub category_id: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
}

impl TryFrom<RecordForm> for NewRecord {
    type Error = Error;

    fn try_from(form: RecordForm) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: require_integer("user_id", form.user_id.as_ref())?,
            category_id: require_integer("category_id", form.category_id.as_ref())?,
            amount: require_number("amount", form.amount.as_ref())?,
        })
    }
}

/// Narrows a record listing to one user and/or one category.
///
/// An empty filter matches every record. When both fields are set a record
/// must match both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Only include records of this user.
    pub user_id: Option<UserId>,
    /// Only include records in this category.
    pub category_id: Option<CategoryId>,
}

impl RecordFilter {
    /// Whether neither field is set.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.category_id.is_none()
    }

    /// Whether `record` passes the filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.user_id.is_none_or(|user_id| record.user_id == user_id)
            && self
                .category_id
                .is_none_or(|category_id| record.category_id == category_id)
    }
}

/// The query string of the record listing, e.g. `?user_id=1&category_id=2`.
///
/// Values are kept as text so that an empty value (`?user_id=`) can be treated
/// as absent.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecordQuery {
    pub user_id: Option<String>,
    pub category_id: Option<String>,
}

impl TryFrom<RecordQuery> for RecordFilter {
    type Error = Error;

    fn try_from(query: RecordQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: parse_query_id("user_id", query.user_id.as_deref())?,
            category_id: parse_query_id("category_id", query.category_id.as_deref())?,
        })
    }
}

fn parse_query_id(field: &str, value: Option<&str>) -> Result<Option<i64>, Error> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidQuery(format!("'{field}' must be an integer, got \"{text}\""))),
    }
}
