use crate::application_port::UserLookupError;
use crate::domain_model::UserId;
use chrono::{DateTime, Utc};

/// Persisted account as the store sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user_id: UserId,
    pub username: String,
    pub password_hash: String,
    pub enabled: bool,
    pub locked: bool,
    pub created_at: DateTime<Utc>,
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the account for an exact username. `Ok(None)` when no account matches.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, UserLookupError>;
}
