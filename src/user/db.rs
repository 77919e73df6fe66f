//! Store operations for users.

use crate::{
    Error, Name, Store,
    user::{User, UserId},
};

/// Create a user and return it with its generated ID.
pub fn create_user(name: Name, store: &mut Store) -> User {
    store.users.insert_with(|id| User { id, name })
}

/// Retrieve a single user by ID.
///
/// # Errors
///
/// Returns [Error::NotFound] if there is no user with `user_id`.
pub fn get_user(user_id: UserId, store: &Store) -> Result<User, Error> {
    store.users.get(user_id).cloned().ok_or(Error::NotFound)
}

/// Retrieve all users ordered by ID.
pub fn get_all_users(store: &Store) -> Vec<User> {
    store.users.rows().cloned().collect()
}

/// Delete a user by ID. Returns an error if the user doesn't exist.
///
/// Records that reference the user are left untouched.
pub fn delete_user(user_id: UserId, store: &mut Store) -> Result<(), Error> {
    if store.users.remove(user_id) {
        Ok(())
    } else {
        Err(Error::DeleteMissingUser)
    }
}
