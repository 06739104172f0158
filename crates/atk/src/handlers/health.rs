//! Health check endpoints.
//!
//! - `/livez` - Liveness probe (immediate 200, no checks)
//! - `/healthz` - Store probe (pings the active backend)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching the store.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Store health.
///
/// Pings the active backend without reading records. Returns 200 with the
/// backend name if it answers, 503 otherwise.
pub async fn healthz(State(state): State<AppState>) -> Response {
    let backend = state.atk_repo.backend();

    match state.atk_repo.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "healthy": true, "backend": backend })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(backend, error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "healthy": false, "backend": backend })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use atk_core::atk::{Atk, AtkId, AtkInput};
    use atk_core::storage::{AtkRepository, RepositoryError, Result};

    use super::*;

    /// Store whose every call fails as if the database were unreachable.
    struct UnreachableRepository;

    fn refused<T>() -> Result<T> {
        Err(RepositoryError::ConnectionFailed("connection refused".to_string()))
    }

    #[async_trait]
    impl AtkRepository for UnreachableRepository {
        async fn list(&self) -> Result<Vec<Atk>> {
            refused()
        }

        async fn list_deleted(&self) -> Result<Vec<Atk>> {
            refused()
        }

        async fn create(&self, _input: &AtkInput) -> Result<Atk> {
            refused()
        }

        async fn update(&self, _id: AtkId, _input: &AtkInput) -> Result<Option<Atk>> {
            refused()
        }

        async fn delete(&self, _id: AtkId) -> Result<bool> {
            refused()
        }

        async fn restore(&self, _id: AtkId) -> Result<bool> {
            refused()
        }

        async fn hard_delete(&self, _id: AtkId) -> Result<bool> {
            refused()
        }

        async fn ping(&self) -> Result<()> {
            refused()
        }

        fn backend(&self) -> &'static str {
            "mysql"
        }
    }

    #[tokio::test]
    async fn test_healthz_ok_for_memory_store() {
        let response = healthz(State(AppState::with_demo_data())).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_unavailable_when_store_fails() {
        let state = AppState::new(Arc::new(UnreachableRepository));

        let response = healthz(State(state)).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_store_failure_hides_driver_detail() {
        let state = AppState::new(Arc::new(UnreachableRepository));

        let err = crate::handlers::atk::list_atk(State(state))
            .await
            .err()
            .unwrap();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.0.to_string(), "failed to get data");
    }

    #[tokio::test]
    async fn test_livez_does_not_touch_store() {
        assert_eq!(livez().await, StatusCode::OK);
    }
}
