mod user_details_service;

pub use user_details_service::*;
