//! Application router configuration.

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    category::{create_category_endpoint, delete_category_endpoint, list_categories_endpoint},
    endpoints,
    record::{
        create_record_endpoint, delete_record_endpoint, get_record_endpoint, list_records_endpoint,
    },
    user::{create_user_endpoint, delete_user_endpoint, get_user_endpoint, list_users_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTHCHECK, get(get_healthcheck))
        .route(endpoints::USER, post(create_user_endpoint))
        .route(
            endpoints::USER_BY_ID,
            get(get_user_endpoint).delete(delete_user_endpoint),
        )
        .route(endpoints::USERS, get(list_users_endpoint))
        .route(
            endpoints::CATEGORY,
            get(list_categories_endpoint)
                .post(create_category_endpoint)
                .delete(delete_category_endpoint),
        )
        .route(
            endpoints::RECORD,
            get(list_records_endpoint).post(create_record_endpoint),
        )
        .route(
            endpoints::RECORD_BY_ID,
            get(get_record_endpoint).delete(delete_record_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The body of the health check response.
#[derive(Debug, Serialize, PartialEq)]
pub struct Health {
    status: String,
}

/// Report that the server is up.
async fn get_healthcheck() -> Json<Health> {
    Json(Health {
        status: "ok".to_owned(),
    })
}

/// A confirmation message, e.g. after deleting an entity.
#[derive(Debug, Serialize, PartialEq)]
pub struct Message {
    message: String,
}

impl Message {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, endpoints, endpoints::format_endpoint};

    fn get_test_server() -> TestServer {
        TestServer::new(build_router(AppState::new())).expect("Could not create test server.")
    }

    async fn post_json(server: &TestServer, path: &str, body: Value) -> Value {
        let response = server.post(path).json(&body).await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    #[tokio::test]
    async fn healthcheck_returns_ok_status() {
        let server = get_test_server();

        let response = server.get(endpoints::HEALTHCHECK).await;

        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn expense_lifecycle() {
        let server = get_test_server();

        let user = post_json(&server, endpoints::USER, json!({"name": "Alice"})).await;
        assert_eq!(user, json!({"id": 1, "name": "Alice"}));

        let category = post_json(&server, endpoints::CATEGORY, json!({"name": "Food"})).await;
        assert_eq!(category, json!({"id": 1, "name": "Food"}));

        let record = post_json(
            &server,
            endpoints::RECORD,
            json!({"user_id": 1, "category_id": 1, "amount": 12.5}),
        )
        .await;
        assert_eq!(record["id"], json!(1));
        assert_eq!(record["user_id"], json!(1));
        assert_eq!(record["category_id"], json!(1));
        assert_eq!(record["amount"], json!(12.5));
        assert!(record["created_at"].is_string());

        let records: Value = server
            .get(endpoints::RECORD)
            .add_query_param("user_id", 1)
            .await
            .json();
        assert_eq!(records, json!([record.clone()]));

        server
            .delete(&format_endpoint(endpoints::USER_BY_ID, 1))
            .await
            .assert_status_ok();
        server
            .get(&format_endpoint(endpoints::USER_BY_ID, 1))
            .await
            .assert_status_not_found();

        // Records are not deleted along with their user.
        let records: Value = server
            .get(endpoints::RECORD)
            .add_query_param("user_id", 1)
            .await
            .json();
        assert_eq!(records, json!([record]));
    }

    #[tokio::test]
    async fn get_record_round_trips() {
        let server = get_test_server();
        post_json(&server, endpoints::USER, json!({"name": "Alice"})).await;
        post_json(&server, endpoints::CATEGORY, json!({"name": "Food"})).await;
        let created = post_json(
            &server,
            endpoints::RECORD,
            json!({"user_id": "1", "category_id": 1, "amount": "-4.25"}),
        )
        .await;

        let response = server.get(&format_endpoint(endpoints::RECORD_BY_ID, 1)).await;

        response.assert_status_ok();
        response.assert_json(&created);
        assert_eq!(created["amount"], json!(-4.25));
    }

    #[tokio::test]
    async fn create_record_validation() {
        let server = get_test_server();
        post_json(&server, endpoints::USER, json!({"name": "Alice"})).await;
        post_json(&server, endpoints::CATEGORY, json!({"name": "Food"})).await;

        server
            .post(endpoints::RECORD)
            .json(&json!({"user_id": 1, "category_id": 1}))
            .await
            .assert_status_bad_request();
        server
            .post(endpoints::RECORD)
            .json(&json!({"user_id": 1, "category_id": 1, "amount": "lots"}))
            .await
            .assert_status_bad_request();
        server
            .post(endpoints::RECORD)
            .json(&json!({"user_id": 999, "category_id": 1, "amount": 1}))
            .await
            .assert_status_not_found();
        server
            .post(endpoints::RECORD)
            .json(&json!({"user_id": 1, "category_id": 999, "amount": 1}))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn list_records_requires_a_filter() {
        let server = get_test_server();

        let response = server.get(endpoints::RECORD).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn list_records_by_category() {
        let server = get_test_server();
        post_json(&server, endpoints::USER, json!({"name": "Alice"})).await;
        post_json(&server, endpoints::CATEGORY, json!({"name": "Food"})).await;
        post_json(&server, endpoints::CATEGORY, json!({"name": "Rent"})).await;
        post_json(
            &server,
            endpoints::RECORD,
            json!({"user_id": 1, "category_id": 1, "amount": 1}),
        )
        .await;
        let rent = post_json(
            &server,
            endpoints::RECORD,
            json!({"user_id": 1, "category_id": 2, "amount": 900}),
        )
        .await;

        let records: Value = server
            .get(endpoints::RECORD)
            .add_query_param("user_id", 1)
            .add_query_param("category_id", 2)
            .await
            .json();

        assert_eq!(records, json!([rent]));
    }

    #[tokio::test]
    async fn create_user_without_name_is_bad_request() {
        let server = get_test_server();

        let response = server.post(endpoints::USER).json(&json!({})).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"error": "missing required field 'name'"}));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let server = get_test_server();

        server
            .post(endpoints::USER)
            .text("not json")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn list_users_and_categories() {
        let server = get_test_server();
        post_json(&server, endpoints::USER, json!({"name": "Alice"})).await;
        post_json(&server, endpoints::USER, json!({"name": "Bob"})).await;
        post_json(&server, endpoints::CATEGORY, json!({"name": "Food"})).await;

        let users: Vec<Value> = server.get(endpoints::USERS).await.json();
        let categories: Vec<Value> = server.get(endpoints::CATEGORY).await.json();

        assert_eq!(users.len(), 2);
        assert!(users.contains(&json!({"id": 2, "name": "Bob"})));
        assert_eq!(categories, vec![json!({"id": 1, "name": "Food"})]);
    }

    #[tokio::test]
    async fn delete_category_reads_id_from_body() {
        let server = get_test_server();
        post_json(&server, endpoints::CATEGORY, json!({"name": "Food"})).await;

        server
            .delete(endpoints::CATEGORY)
            .json(&json!({}))
            .await
            .assert_status_bad_request();
        server
            .delete(endpoints::CATEGORY)
            .json(&json!({"id": 1}))
            .await
            .assert_status_ok();
        server
            .delete(endpoints::CATEGORY)
            .json(&json!({"id": 1}))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_category_with_non_integer_id_is_bad_request() {
        let server = get_test_server();
        post_json(&server, endpoints::CATEGORY, json!({"name": "Food"})).await;

        server
            .delete(endpoints::CATEGORY)
            .json(&json!({"id": "food"}))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn get_missing_record_is_not_found() {
        let server = get_test_server();

        let response = server.get(&format_endpoint(endpoints::RECORD_BY_ID, 99)).await;

        response.assert_status_not_found();
        response.assert_json(&json!({"error": "the requested resource could not be found"}));
    }

    #[tokio::test]
    async fn delete_missing_user_and_record_is_not_found() {
        let server = get_test_server();

        server
            .delete(&format_endpoint(endpoints::USER_BY_ID, 7))
            .await
            .assert_status_not_found();
        server
            .delete(&format_endpoint(endpoints::RECORD_BY_ID, 7))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn non_integer_path_id_is_bad_request() {
        let server = get_test_server();

        server.get("/user/alice").await.assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/nope").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }
}
