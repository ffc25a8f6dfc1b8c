//! Settings are read from a TOML file, `settings/dev.toml` by default in debug builds.
//! Pass `--settings <path>` to load another file.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
