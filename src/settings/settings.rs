use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;
use std::fmt;

const REDACTED: &str = "<redacted>";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: Http,
    pub log: Log,
    pub store: Store,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
    // TLS is enabled only when both paths are set
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Deserialize)]
pub struct Store {
    pub backend: String, // "memory" or "mysql"
    pub dsn: Option<String>,
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
}

#[derive(Clone, Deserialize)]
pub struct SeedAccount {
    pub username: String,
    pub password_hash: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub locked: bool,
}

fn default_enabled() -> bool {
    true
}

// dsn carries the database password
impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("backend", &self.backend)
            .field("dsn", &self.dsn.as_ref().map(|_| REDACTED))
            .field("accounts", &self.accounts)
            .finish()
    }
}

impl fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAccount")
            .field("username", &self.username)
            .field("password_hash", &REDACTED)
            .field("enabled", &self.enabled)
            .field("locked", &self.locked)
            .finish()
    }
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
