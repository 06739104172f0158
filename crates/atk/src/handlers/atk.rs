//! ATK CRUD handlers.
//!
//! Handlers validate the path and body, call the repository trait object and
//! map the outcome to a status code. Failures are returned as [`AppError`].

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use atk_core::atk::{validate_input, Atk, AtkId, AtkInput, ValidationError};
use atk_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Parses the `{id}` path segment.
pub fn parse_id(raw: &str) -> Result<AtkId, ValidationError> {
    raw.trim()
        .parse::<AtkId>()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Unwraps a JSON body, turning extractor rejections into validation errors.
fn parse_body(body: Result<Json<AtkInput>, JsonRejection>) -> Result<AtkInput, ValidationError> {
    body.map(|Json(input)| input)
        .map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))
}

/// List active ATK records (GET /api/atk).
pub async fn list_atk(State(state): State<AppState>) -> Result<Json<Vec<Atk>>, AppError> {
    let records = state
        .atk_repo
        .list()
        .await
        .context("failed to get data")?;

    Ok(Json(records))
}

/// List soft-deleted ATK records (GET /api/atk/deleted).
pub async fn list_deleted_atk(State(state): State<AppState>) -> Result<Json<Vec<Atk>>, AppError> {
    let records = state
        .atk_repo
        .list_deleted()
        .await
        .context("failed to get deleted data")?;

    Ok(Json(records))
}

/// Non-GET requests to `/api/atk/deleted`.
///
/// That path shadows `/api/atk/{id}`, so other methods treat `deleted` as a
/// malformed id instead of answering 405.
pub async fn reject_deleted_as_id() -> AppError {
    ValidationError::InvalidId("deleted".to_string()).into()
}

/// Create an ATK record (POST /api/atk).
pub async fn create_atk(
    State(state): State<AppState>,
    body: Result<Json<AtkInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Atk>), AppError> {
    let input = parse_body(body)?;
    validate_input(&input)?;

    let atk = state
        .atk_repo
        .create(&input)
        .await
        .context("failed to create item")?;

    tracing::info!(atk_id = atk.id, nama = %atk.nama, "Created ATK record");
    Ok((StatusCode::CREATED, Json(atk)))
}

/// Replace the fields of an active ATK record (PUT /api/atk/{id}).
///
/// The id is checked first, then the body, then the quantity; existence is
/// checked last.
pub async fn update_atk(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AtkInput>, JsonRejection>,
) -> Result<Json<Atk>, AppError> {
    let id = parse_id(&id)?;
    let input = parse_body(body)?;
    validate_input(&input)?;

    let atk = state
        .atk_repo
        .update(id, &input)
        .await
        .context("failed to update")?
        .ok_or_else(|| RepositoryError::atk_not_found(id))?;

    tracing::info!(atk_id = id, "Updated ATK record");
    Ok(Json(atk))
}

/// Soft-delete an ATK record (DELETE /api/atk/{id}).
pub async fn delete_atk(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    let deleted = state
        .atk_repo
        .delete(id)
        .await
        .context("failed to delete")?;
    if !deleted {
        return Err(RepositoryError::atk_not_found(id).into());
    }

    tracing::info!(atk_id = id, "Soft-deleted ATK record");
    Ok(StatusCode::NO_CONTENT)
}

/// Restore a soft-deleted ATK record (POST /api/atk/{id}/restore).
pub async fn restore_atk(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_id(&id)?;

    let restored = state
        .atk_repo
        .restore(id)
        .await
        .context("failed to restore")?;
    if !restored {
        return Err(RepositoryError::atk_not_found(id).into());
    }

    tracing::info!(atk_id = id, "Restored ATK record");
    Ok(Json(json!({ "id": id, "deleted": false })))
}

/// Permanently remove an ATK record (DELETE /api/atk/{id}/permanent).
///
/// Applies to active and soft-deleted records alike.
pub async fn hard_delete_atk(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    let removed = state
        .atk_repo
        .hard_delete(id)
        .await
        .context("failed to delete permanently")?;
    if !removed {
        return Err(RepositoryError::atk_not_found(id).into());
    }

    tracing::info!(atk_id = id, "Permanently deleted ATK record");
    Ok(StatusCode::NO_CONTENT)
}
