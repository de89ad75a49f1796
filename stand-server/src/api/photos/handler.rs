//! Photos API Handlers
//!
//! Metadata plus the two binary endpoints (`/file`, `/thumbnail`)
//! that `<img>` tags point at.

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;

use crate::core::ServerState;
use crate::db::models::Photo;
use crate::db::repository::PhotoRepository;
use crate::utils::{AppError, AppResult};
use shared::models::Photo as SharedPhoto;

const RESOURCE: &str = "photo";

/// GET /api/photos - every photo, newest first (receipt picker)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedPhoto>>> {
    let repo = PhotoRepository::new(state.db.clone());
    let photos = repo.find_all().await?;
    Ok(Json(photos.into_iter().map(|p| p.into()).collect()))
}

/// GET /api/photos/:id - single photo metadata
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedPhoto>> {
    let photo = require_photo(&state, &id).await?;
    Ok(Json(photo.into()))
}

/// DELETE /api/photos/:id - remove a photo (metadata, count, files)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = PhotoRepository::new(state.db.clone());
    let photo = repo.delete(&id).await?;

    let album_key = photo.album.key().to_string();
    state.photos.delete(&album_key, &photo.file_name);

    state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    state.broadcast_sync::<()>("album", "updated", &photo.album.to_string(), None);

    Ok(Json(true))
}

/// GET /api/photos/:id/file - full-size binary
pub async fn file(State(state): State<ServerState>, Path(id): Path<String>) -> AppResult<Response> {
    let photo = require_photo(&state, &id).await?;
    let album_key = photo.album.key().to_string();
    serve_file(state.photos.photo_path(&album_key, &photo.file_name), &photo.file_name).await
}

/// GET /api/photos/:id/thumbnail - thumbnail binary
pub async fn thumbnail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let photo = require_photo(&state, &id).await?;
    let album_key = photo.album.key().to_string();
    serve_file(
        state.photos.thumbnail_path(&album_key, &photo.file_name),
        &photo.file_name,
    )
    .await
}

async fn serve_file(path: PathBuf, file_name: &str) -> AppResult<Response> {
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found("Photo file not found"))?;
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], data).into_response())
}

async fn require_photo(state: &ServerState, id: &str) -> Result<Photo, AppError> {
    let repo = PhotoRepository::new(state.db.clone());
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Photo {} not found", id)))
}
