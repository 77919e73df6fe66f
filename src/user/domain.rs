//! Core user domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Name;

/// Store identifier for a user.
pub type UserId = i64;

/// A person whose expenses are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct User {
    /// The ID assigned by the store, starting at 1.
    pub id: UserId,
    /// The user's display name.
    pub name: Name,
}

/// JSON body for creating a user.
///
/// Fields are kept as raw JSON so that missing and mistyped values can be
/// reported separately.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserForm {
    /// The name of the new user.
    #[serde(default)]
    pub name: Option<Value>,
}
