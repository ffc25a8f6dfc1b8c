use crate::application_port::UserLookupError;
use crate::domain_model::UserId;
use crate::domain_port::{Account, UserStore};
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

/// Reads accounts from the `user_account` table. `username` carries a unique key.
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlUserStore { pool }
    }

    #[inline]
    fn store_err(e: impl std::fmt::Display) -> UserLookupError {
        UserLookupError::StoreUnavailable(e.to_string())
    }

    #[inline]
    fn uid_from_bytes(id: &[u8]) -> Result<UserId, UserLookupError> {
        Ok(UserId(Uuid::from_slice(id).map_err(Self::store_err)?))
    }

    fn row_to_account(row: MySqlRow) -> Result<Account, UserLookupError> {
        let user_id_bytes: Vec<u8> = row.try_get("user_id").map_err(Self::store_err)?;
        let user_id = Self::uid_from_bytes(&user_id_bytes)?;

        let username: String = row.try_get("username").map_err(Self::store_err)?;
        let password_hash: String = row.try_get("password_hash").map_err(Self::store_err)?;
        let enabled: bool = row.try_get("enabled").map_err(Self::store_err)?;
        let locked: bool = row.try_get("locked").map_err(Self::store_err)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(Self::store_err)?;

        Ok(Account {
            user_id,
            username,
            password_hash,
            enabled,
            locked,
            created_at,
        })
    }
}

#[async_trait::async_trait]
impl UserStore for MySqlUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, UserLookupError> {
        let row_opt: Option<MySqlRow> = sqlx::query(
            r#"
SELECT user_id, username, password_hash, enabled, locked, created_at
FROM user_account
WHERE username = ?
"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::store_err)?;

        row_opt.map(Self::row_to_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_user_id_is_store_unavailable() {
        let err = MySqlUserStore::uid_from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, UserLookupError::StoreUnavailable(_)));
    }

    #[test]
    fn test_binary_user_id_decodes() {
        let expected = UserId::from_username("alice");
        let decoded = MySqlUserStore::uid_from_bytes(expected.0.as_bytes()).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_driver_error_is_store_unavailable() {
        let err = MySqlUserStore::store_err(sqlx::Error::PoolTimedOut);
        assert_eq!(
            err,
            UserLookupError::StoreUnavailable(sqlx::Error::PoolTimedOut.to_string())
        );
    }
}
