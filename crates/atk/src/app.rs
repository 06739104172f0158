use axum::{
    http::{header, Method},
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        atk::{
            create_atk, delete_atk, hard_delete_atk, list_atk, list_deleted_atk,
            reject_deleted_as_id, restore_atk, update_atk,
        },
        health::{healthz, livez},
    },
    middleware::log_requests,
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/atk", get(list_atk).post(create_atk))
        .route(
            "/atk/deleted",
            get(list_deleted_atk).fallback(reject_deleted_as_id),
        )
        .route("/atk/{id}", put(update_atk).delete(delete_atk))
        .route("/atk/{id}/restore", post(restore_atk))
        .route("/atk/{id}/permanent", delete(hard_delete_atk))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        app.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    // ==================== Listing ====================

    #[tokio::test]
    async fn test_list_empty() {
        let app = create_app(AppState::default());

        let response = send(&app, "GET", "/api/atk", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_demo_data() {
        let app = create_app(AppState::with_demo_data());

        let response = send(&app, "GET", "/api/atk", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!([{
                "id": 1,
                "nama": "Pulpen Gel",
                "jenis": "Alat Tulis",
                "qty": 10,
                "deleted": false
            }])
        );
    }

    // ==================== Create ====================

    #[tokio::test]
    async fn test_create_returns_201_with_record() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            "POST",
            "/api/atk",
            Some(r#"{"nama":"Pensil","jenis":"Alat Tulis","qty":5}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["nama"], "Pensil");
        assert_eq!(created["deleted"], false);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id_and_deleted() {
        let app = create_app(AppState::with_demo_data());

        let response = send(
            &app,
            "POST",
            "/api/atk",
            Some(r#"{"id":1,"nama":"Spidol","jenis":"Alat Tulis","qty":2,"deleted":true}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["id"], 2);
        assert_eq!(created["deleted"], false);
    }

    #[tokio::test]
    async fn test_create_zero_qty_is_accepted() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            "POST",
            "/api/atk",
            Some(r#"{"nama":"Map","jenis":"Kertas","qty":0}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_negative_qty_is_rejected() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            "POST",
            "/api/atk",
            Some(r#"{"nama":"Pensil","jenis":"Alat Tulis","qty":-1}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "qty must not be negative" })
        );

        let response = send(&app, "GET", "/api/atk", None).await;
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_malformed_json_is_rejected() {
        let app = create_app(AppState::default());

        let response = send(&app, "POST", "/api/atk", Some(r#"{"nama": "#)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request body"));
    }

    #[tokio::test]
    async fn test_create_wrong_field_type_is_rejected() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            "POST",
            "/api/atk",
            Some(r#"{"nama":"Pensil","jenis":"Alat Tulis","qty":"lima"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // ==================== Update ====================

    #[tokio::test]
    async fn test_update_replaces_record() {
        let app = create_app(AppState::with_demo_data());

        let response = send(
            &app,
            "PUT",
            "/api/atk/1",
            Some(r#"{"nama":"Pulpen Gel Biru","jenis":"Alat Tulis","qty":7}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "id": 1,
                "nama": "Pulpen Gel Biru",
                "jenis": "Alat Tulis",
                "qty": 7,
                "deleted": false
            })
        );
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            "PUT",
            "/api/atk/42",
            Some(r#"{"nama":"Pensil","jenis":"Alat Tulis","qty":1}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_error_precedence() {
        let app = create_app(AppState::default());

        // Bad id wins over a bad body.
        let response = send(&app, "PUT", "/api/atk/abc", Some("not json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "invalid id: abc");

        // Negative qty wins over a missing record.
        let response = send(
            &app,
            "PUT",
            "/api/atk/42",
            Some(r#"{"nama":"Pensil","jenis":"Alat Tulis","qty":-5}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_soft_deleted_is_404_and_stays_deleted() {
        let app = create_app(AppState::with_demo_data());
        send(&app, "DELETE", "/api/atk/1", None).await;

        let response = send(
            &app,
            "PUT",
            "/api/atk/1",
            Some(r#"{"nama":"Baru","jenis":"Alat Tulis","qty":1}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, "GET", "/api/atk", None).await;
        assert_eq!(json_body(response).await, json!([]));
        let response = send(&app, "GET", "/api/atk/deleted", None).await;
        assert_eq!(json_body(response).await[0]["nama"], "Pulpen Gel");
    }

    #[tokio::test]
    async fn test_deleted_is_an_invalid_id_for_put_and_delete() {
        let app = create_app(AppState::with_demo_data());

        let response = send(
            &app,
            "PUT",
            "/api/atk/deleted",
            Some(r#"{"nama":"x","jenis":"y","qty":1}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "invalid id: deleted" })
        );

        let response = send(&app, "DELETE", "/api/atk/deleted", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "GET", "/api/atk", None).await;
        assert_eq!(json_body(response).await[0]["id"], 1);
    }

    // ==================== Soft Delete / Restore ====================

    #[tokio::test]
    async fn test_soft_delete_scenario() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            "POST",
            "/api/atk",
            Some(r#"{"nama":"Pensil","jenis":"Alat Tulis","qty":5}"#),
        )
        .await;
        let id = json_body(response).await["id"].as_i64().unwrap();

        let response = send(&app, "DELETE", &format!("/api/atk/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", "/api/atk", None).await;
        assert_eq!(json_body(response).await, json!([]));

        let response = send(&app, "GET", "/api/atk/deleted", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let deleted = json_body(response).await;
        assert_eq!(deleted[0]["id"], id);
        assert_eq!(deleted[0]["deleted"], true);
    }

    #[tokio::test]
    async fn test_double_delete_is_404() {
        let app = create_app(AppState::with_demo_data());

        let first = send(&app, "DELETE", "/api/atk/1", None).await;
        let second = send(&app, "DELETE", "/api/atk/1", None).await;

        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_bad_id_is_400() {
        let app = create_app(AppState::with_demo_data());

        let response = send(&app, "DELETE", "/api/atk/satu", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_restore() {
        let app = create_app(AppState::with_demo_data());
        send(&app, "DELETE", "/api/atk/1", None).await;

        let response = send(&app, "POST", "/api/atk/1/restore", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "id": 1, "deleted": false }));

        let response = send(&app, "GET", "/api/atk", None).await;
        assert_eq!(json_body(response).await[0]["id"], 1);

        let response = send(&app, "POST", "/api/atk/1/restore", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ==================== Hard Delete ====================

    #[tokio::test]
    async fn test_hard_delete() {
        let app = create_app(AppState::with_demo_data());
        send(&app, "DELETE", "/api/atk/1", None).await;

        let response = send(&app, "DELETE", "/api/atk/1/permanent", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", "/api/atk/deleted", None).await;
        assert_eq!(json_body(response).await, json!([]));

        let response = send(&app, "DELETE", "/api/atk/1/permanent", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = send(&app, "POST", "/api/atk/1/restore", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ==================== Health ====================

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = send(&app, "GET", "/livez", None).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_backend() {
        let app = create_app(AppState::default());

        let response = send(&app, "GET", "/healthz", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "healthy": true, "backend": "memory" })
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/atk")
                    .header("Origin", "http://localhost:5173")
                    .header("Access-Control-Request-Method", "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
