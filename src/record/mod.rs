//! Expense records: an amount spent by a user in a category.

mod create;
mod db;
mod delete;
mod domain;
mod get;
mod list;

pub use create::create_record_endpoint;
pub use db::{create_record, delete_record, get_record, get_records};
pub use delete::delete_record_endpoint;
pub use domain::{NewRecord, Record, RecordFilter, RecordForm, RecordId, RecordQuery};
pub use get::get_record_endpoint;
pub use list::list_records_endpoint;
