use crate::application_port::UserLookupError;
use crate::domain_model::UserId;
use crate::domain_port::{Account, UserStore};
use crate::settings::SeedAccount;
use chrono::Utc;
use dashmap::DashMap;

/// Accounts keyed by exact username, so lookups are case-sensitive.
#[derive(Default)]
pub struct MemoryUserStore {
    accounts: DashMap<String, Account>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        MemoryUserStore {
            accounts: DashMap::new(),
        }
    }

    pub fn from_seeds(seeds: &[SeedAccount]) -> Self {
        let store = Self::new();
        let now = Utc::now();
        for seed in seeds {
            store.insert(Account {
                user_id: UserId::from_username(&seed.username),
                username: seed.username.clone(),
                password_hash: seed.password_hash.clone(),
                enabled: seed.enabled,
                locked: seed.locked,
                created_at: now,
            });
        }
        store
    }

    /// Replaces any account already stored under the same username.
    pub fn insert(&self, account: Account) {
        self.accounts.insert(account.username.clone(), account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, UserLookupError> {
        Ok(self.accounts.get(username).map(|entry| entry.value().clone()))
    }
}
