mod error;
mod handler;
mod router;

pub use error::*;
pub use handler::{ApiResponse, PUBLIC_HOME, get_public_home};
pub use router::routes;
