use async_trait::async_trait;
use biblia_core::model::AuthToken;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{SessionRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl SessionRepository for SqliteRepository {
    async fn load_token(&self) -> Result<Option<AuthToken>, StorageError> {
        let row = sqlx::query("SELECT token FROM session WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("token")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        AuthToken::new(raw)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_token(&self, token: &AuthToken) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO session (id, token, saved_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                token = excluded.token,
                saved_at = excluded.saved_at
            ",
        )
        .bind(1_i64)
        .bind(token.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM session WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
