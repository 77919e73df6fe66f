//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/user/{user_id}', use [format_endpoint].

/// The route for checking that the server is up.
pub const HEALTHCHECK: &str = "/healthcheck";
/// The route to create a user.
pub const USER: &str = "/user";
/// The route to get or delete a single user.
pub const USER_BY_ID: &str = "/user/{user_id}";
/// The route to list all users.
pub const USERS: &str = "/users";
/// The route to create, list and delete categories.
///
/// Deleting a category takes the ID from the JSON body rather than the path.
pub const CATEGORY: &str = "/category";
/// The route to create records and list them by user and/or category.
pub const RECORD: &str = "/record";
/// The route to get or delete a single record.
pub const RECORD_BY_ID: &str = "/record/{record_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/user/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
