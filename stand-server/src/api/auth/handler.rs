//! Auth API Handlers
//!
//! Nickname accounts. Registration enforces nickname uniqueness;
//! login reissues a token for an existing account. Renaming reissues
//! the token since the nickname is embedded in the claims.

use axum::{Extension, Json, extract::State};
use serde::Serialize;

use crate::api::convert::option_record_id_to_string;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::NicknameRequest;
use crate::db::repository::UserRepository;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::User as SharedUser;

/// Token plus the account it belongs to
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SharedUser,
}

/// POST /api/auth/register - create a new nickname account
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<NicknameRequest>,
) -> AppResult<Json<LoginResponse>> {
    let nickname = payload.nickname.trim();
    validate_required_text(nickname, "nickname", MAX_SHORT_TEXT_LEN)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.create(nickname).await?;

    let id = option_record_id_to_string(&user.id)
        .ok_or_else(|| AppError::internal("Created user has no id"))?;
    let token = state.jwt_service.generate_token(&id, &user.nickname)?;

    tracing::info!(nickname = %user.nickname, "User registered");
    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/auth/login - token for an existing account
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<NicknameRequest>,
) -> AppResult<Json<LoginResponse>> {
    let nickname = payload.nickname.trim();
    validate_required_text(nickname, "nickname", MAX_SHORT_TEXT_LEN)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_nickname(nickname)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{}' not found", nickname)))?;

    let id = option_record_id_to_string(&user.id)
        .ok_or_else(|| AppError::internal("User has no id"))?;
    let token = state.jwt_service.generate_token(&id, &user.nickname)?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/me - the account behind the current token
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<SharedUser>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user.into()))
}

/// PUT /api/auth/nickname - rename the current account
pub async fn update_nickname(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<NicknameRequest>,
) -> AppResult<Json<LoginResponse>> {
    let nickname = payload.nickname.trim();
    validate_required_text(nickname, "nickname", MAX_SHORT_TEXT_LEN)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.update_nickname(&current.id, nickname).await?;

    let id = option_record_id_to_string(&user.id)
        .ok_or_else(|| AppError::internal("User has no id"))?;
    let token = state.jwt_service.generate_token(&id, &user.nickname)?;

    let api_user: SharedUser = user.into();
    state.broadcast_sync("user", "updated", &id, Some(&api_user));

    Ok(Json(LoginResponse {
        token,
        user: api_user,
    }))
}
