use crate::application_port::{Authenticatable, UserDetailsService, UserLookupError};
use crate::domain_port::UserStore;
use crate::logger::*;
use std::sync::Arc;

pub struct RealUserDetailsService {
    user_store: Arc<dyn UserStore>,
}

impl RealUserDetailsService {
    pub fn new(user_store: Arc<dyn UserStore>) -> RealUserDetailsService {
        RealUserDetailsService { user_store }
    }
}

#[async_trait::async_trait]
impl UserDetailsService for RealUserDetailsService {
    async fn load_by_username(&self, username: &str) -> Result<Authenticatable, UserLookupError> {
        debug!(username, "loading account");

        let account = match self.user_store.find_by_username(username).await? {
            Some(account) => account,
            None => {
                debug!(username, "account not found");
                return Err(UserLookupError::not_found());
            }
        };

        Ok(Authenticatable::new(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_model::UserId;
    use crate::domain_port::Account;
    use crate::infra_memory::MemoryUserStore;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn account(username: &str, secret: &str) -> Account {
        Account {
            user_id: UserId::from_username(username),
            username: username.to_string(),
            password_hash: secret.to_string(),
            enabled: true,
            locked: false,
            created_at: Utc::now(),
        }
    }

    /// Counts reads and answers with a fixed result.
    struct ScriptedStore {
        result: Result<Option<Account>, UserLookupError>,
        calls: AtomicUsize,
    }

    impl ScriptedStore {
        fn new(result: Result<Option<Account>, UserLookupError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl UserStore for ScriptedStore {
        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<Account>, UserLookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_found_account_is_passed_through() {
        let store = MemoryUserStore::new();
        let alice = account("alice", "h1");
        store.insert(alice.clone());
        let service = RealUserDetailsService::new(Arc::new(store));

        let user = service.load_by_username("alice").await.unwrap();

        assert_eq!(user.username(), "alice");
        assert_eq!(user.password(), "h1");
        assert_eq!(user.account(), &alice);
        assert!(user.is_enabled());
        assert!(user.is_account_non_locked());
        assert!(user.is_account_non_expired());
        assert!(user.is_credentials_non_expired());
    }

    #[tokio::test]
    async fn test_empty_store_is_not_found() {
        let service = RealUserDetailsService::new(Arc::new(MemoryUserStore::new()));

        let err = service.load_by_username("bob").await.unwrap_err();

        assert_eq!(err, UserLookupError::NotFound("User not found".to_string()));
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_store_read_once_per_lookup() {
        let store = Arc::new(ScriptedStore::new(Ok(None)));
        let service = RealUserDetailsService::new(store.clone());

        assert!(service.load_by_username("bob").await.is_err());
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates_without_retry() {
        let store = Arc::new(ScriptedStore::new(Err(UserLookupError::StoreUnavailable(
            "connection refused".to_string(),
        ))));
        let service = RealUserDetailsService::new(store.clone());

        let err = service.load_by_username("alice").await.unwrap_err();

        assert_eq!(
            err,
            UserLookupError::StoreUnavailable("connection refused".to_string())
        );
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_locked_and_disabled_flags_are_reported() {
        let mut carol = account("carol", "h3");
        carol.enabled = false;
        carol.locked = true;
        let store = Arc::new(ScriptedStore::new(Ok(Some(carol))));
        let service = RealUserDetailsService::new(store);

        let user = service.load_by_username("carol").await.unwrap();

        assert!(!user.is_enabled());
        assert!(!user.is_account_non_locked());
    }

    #[tokio::test]
    async fn test_empty_username_is_left_to_store() {
        let store = Arc::new(ScriptedStore::new(Ok(Some(account("", "h0")))));
        let service = RealUserDetailsService::new(store.clone());

        let user = service.load_by_username("").await.unwrap();

        assert_eq!(user.username(), "");
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }
}
