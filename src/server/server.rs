use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::anyhow;
use sqlx::{MySql, Pool};
use std::sync::Arc;

pub struct Server {
    pub user_details_service: Arc<dyn UserDetailsService>,
    pool: Option<Pool<MySql>>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let mut pool = None;

        let user_store: Arc<dyn UserStore> = match settings.store.backend.as_str() {
            "memory" => {
                let store = MemoryUserStore::from_seeds(&settings.store.accounts);
                info!(accounts = store.len(), "memory user store seeded");
                Arc::new(store)
            }
            "mysql" => {
                let dsn = settings
                    .store
                    .dsn
                    .as_deref()
                    .ok_or_else(|| anyhow!("store.dsn is required for the mysql backend"))?;
                let mysql = Pool::<MySql>::connect(dsn).await?;
                pool = Some(mysql.clone());
                Arc::new(MySqlUserStore::new(mysql))
            }
            other => return Err(anyhow!("Unknown store backend: {}", other)),
        };

        let user_details_service: Arc<dyn UserDetailsService> =
            Arc::new(RealUserDetailsService::new(user_store));

        info!(backend = %settings.store.backend, "server started");

        Ok(Self {
            user_details_service,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("mysql pool closed");
        }
    }
}
