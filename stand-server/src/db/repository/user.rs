//! User Repository

use chrono::Utc;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::User;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(user)
    }

    /// Find user by nickname
    pub async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<User>> {
        let nickname = nickname.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE nickname = $nickname LIMIT 1")
            .bind(("nickname", nickname))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user. Nicknames are unique.
    pub async fn create(&self, nickname: &str) -> RepoResult<User> {
        if self.find_by_nickname(nickname).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Nickname '{}' already exists",
                nickname
            )));
        }

        #[derive(Serialize)]
        struct UserContent {
            nickname: String,
            created_at: chrono::DateTime<Utc>,
        }

        let created: Option<User> = self
            .base
            .db()
            .create(TABLE)
            .content(UserContent {
                nickname: nickname.to_string(),
                created_at: Utc::now(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Change a user's nickname, keeping nicknames unique.
    pub async fn update_nickname(&self, id: &str, nickname: &str) -> RepoResult<User> {
        if self.find_by_nickname(nickname).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Nickname '{}' already exists",
                nickname
            )));
        }

        let nickname = nickname.to_string();
        let mut result = self
            .base
            .db()
            .query("UPDATE $user SET nickname = $nickname RETURN AFTER")
            .bind(("user", record_id(TABLE, id)))
            .bind(("nickname", nickname))
            .await?;
        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }
}
