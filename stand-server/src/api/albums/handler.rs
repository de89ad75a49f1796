//! Albums API Handlers
//!
//! Album deletion cascades to the photo records in one batch; the
//! files are removed afterwards, with the metadata as the source of
//! truth.

use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{AlbumCreate, AlbumRename};
use crate::db::repository::{AlbumRepository, PhotoRepository, record_id};
use crate::storage::PhotoStore;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Album as SharedAlbum, Photo as SharedPhoto};

const RESOURCE: &str = "album";

/// GET /api/albums - all albums, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedAlbum>>> {
    let repo = AlbumRepository::new(state.db.clone());
    let albums = repo.find_all().await?;
    Ok(Json(albums.into_iter().map(|a| a.into()).collect()))
}

/// POST /api/albums - create an album
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<AlbumCreate>,
) -> AppResult<Json<SharedAlbum>> {
    let name = payload.name.trim();
    validate_required_text(name, "name", MAX_NAME_LEN)?;

    let repo = AlbumRepository::new(state.db.clone());
    let album = repo.create(name, record_id("user", &user.id)).await?;

    let api_album: SharedAlbum = album.into();
    let id = api_album.id.clone().unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&api_album));

    Ok(Json(api_album))
}

/// PUT /api/albums/:id - rename
pub async fn rename(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AlbumRename>,
) -> AppResult<Json<SharedAlbum>> {
    let name = payload.name.trim();
    validate_required_text(name, "name", MAX_NAME_LEN)?;

    let repo = AlbumRepository::new(state.db.clone());
    let album = repo.rename(&id, name).await?;

    let api_album: SharedAlbum = album.into();
    state.broadcast_sync(RESOURCE, "updated", &id, Some(&api_album));

    Ok(Json(api_album))
}

/// DELETE /api/albums/:id - delete the album with all its photos
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let album_rid = record_id("album", &id);
    let photo_repo = PhotoRepository::new(state.db.clone());
    let photos = photo_repo.find_by_album(album_rid.clone()).await?;

    let repo = AlbumRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;

    if result {
        // Records are gone; now drop the files
        let album_key = album_rid.key().to_string();
        for photo in &photos {
            state.photos.delete(&album_key, &photo.file_name);
        }
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}

/// GET /api/albums/:id/photos - photos of one album, newest first
pub async fn list_photos(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<SharedPhoto>>> {
    let album = require_album(&state, &id).await?;
    let repo = PhotoRepository::new(state.db.clone());
    let photos = repo.find_by_album(album).await?;
    Ok(Json(photos.into_iter().map(|p| p.into()).collect()))
}

/// POST /api/albums/:id/photos - multipart photo upload
///
/// Expects a `file` part. The image is validated, re-encoded to JPEG
/// in two sizes, written to the photo store, and the metadata record
/// bumps the album's photo count.
pub async fn upload_photo(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<SharedPhoto>> {
    let album = require_album(&state, &id).await?;

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let original_name = field.file_name().unwrap_or("photo").to_string();
            let data = field.bytes().await?.to_vec();
            upload = Some((original_name, data));
        }
    }

    let (original_name, data) =
        upload.ok_or_else(|| AppError::validation("Missing 'file' field"))?;
    PhotoStore::validate(&data, &original_name)?;

    let album_key = album.key().to_string();
    let stored = state.photos.save(&album_key, &data)?;

    let repo = PhotoRepository::new(state.db.clone());
    let photo = repo
        .create(
            album,
            &stored.url,
            &stored.thumbnail_url,
            &stored.file_name,
            record_id("user", &user.id),
        )
        .await
        .inspect_err(|_| {
            // Metadata failed; don't leave orphaned files behind
            state.photos.delete(&album_key, &stored.file_name);
        })?;

    let api_photo: SharedPhoto = photo.into();
    let photo_id = api_photo.id.clone().unwrap_or_default();
    state.broadcast_sync("photo", "created", &photo_id, Some(&api_photo));
    state.broadcast_sync::<()>(RESOURCE, "updated", &id, None);

    tracing::info!(album = %id, file = %api_photo.file_name, "Photo uploaded");
    Ok(Json(api_photo))
}

/// Resolve the album or 404.
async fn require_album(
    state: &ServerState,
    album_id: &str,
) -> Result<surrealdb::RecordId, AppError> {
    let repo = AlbumRepository::new(state.db.clone());
    let album = repo
        .find_by_id(album_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Album {} not found", album_id)))?;
    album
        .id
        .ok_or_else(|| AppError::internal("Album record has no id"))
}
