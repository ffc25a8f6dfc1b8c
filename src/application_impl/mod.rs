mod user_details_service_impl;

pub use user_details_service_impl::*;
