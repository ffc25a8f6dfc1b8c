use super::Parser;

/// Serve the public endpoints and the account lookup.
#[derive(Parser, Debug)]
#[command(name = "loginkit")]
pub struct Cli {
    /// Path to a TOML settings file.
    #[arg(long)]
    pub settings: Option<String>,
}
