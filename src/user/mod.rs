//! Users of the expense tracker.

mod create;
mod db;
mod delete;
mod domain;
mod get;
mod list;

pub use create::create_user_endpoint;
pub use db::{create_user, delete_user, get_all_users, get_user};
pub use delete::delete_user_endpoint;
pub use domain::{User, UserForm, UserId};
pub use get::get_user_endpoint;
pub use list::list_users_endpoint;
