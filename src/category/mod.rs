//! Expense categories, e.g. 'Food' or 'Rent'.

mod create;
mod db;
mod delete;
mod domain;
mod list;

pub use create::create_category_endpoint;
pub use db::{create_category, delete_category, get_all_categories, get_category};
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryForm, CategoryId, DeleteCategoryForm};
pub use list::list_categories_endpoint;
