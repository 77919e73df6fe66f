//! Core category domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Name;

/// Store identifier for a category.
pub type CategoryId = i64;

/// A category for grouping expense records (e.g., 'Food', 'Transport').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID assigned by the store, starting at 1.
    pub id: CategoryId,
    /// The category's display name.
    pub name: Name,
}

/// JSON body for creating a category.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: Option<Value>,
}

/// JSON body for deleting a category.
///
/// Unlike users and records, the category ID is sent in the body.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeleteCategoryForm {
    #[serde(default)]
    pub id: Option<Value>,
}
