use crate::domain_port::Account;

pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserLookupError {
    #[error("{0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl UserLookupError {
    pub fn not_found() -> Self {
        UserLookupError::NotFound(USER_NOT_FOUND.to_string())
    }
}

/// Read-only view over one account, handed to whatever verifies the credentials.
///
/// Expiry is not tracked for accounts, so both expiry checks always pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticatable {
    account: Account,
}

impl Authenticatable {
    pub fn new(account: Account) -> Self {
        Authenticatable { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn username(&self) -> &str {
        &self.account.username
    }

    /// The stored credential hash.
    pub fn password(&self) -> &str {
        &self.account.password_hash
    }

    pub fn is_enabled(&self) -> bool {
        self.account.enabled
    }

    pub fn is_account_non_locked(&self) -> bool {
        !self.account.locked
    }

    pub fn is_account_non_expired(&self) -> bool {
        true
    }

    pub fn is_credentials_non_expired(&self) -> bool {
        true
    }
}

#[async_trait::async_trait]
pub trait UserDetailsService: Send + Sync {
    async fn load_by_username(&self, username: &str) -> Result<Authenticatable, UserLookupError>;
}
