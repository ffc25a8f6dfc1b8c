use super::error::*;
use serde::Serialize;

pub const PUBLIC_HOME: &str = "Public Home";

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(code: ApiErrorCode, message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
        }
    }
}

pub fn get_public_home() -> &'static str {
    PUBLIC_HOME
}

/// Served as `text/plain; charset=utf-8`.
pub async fn home() -> Result<impl warp::Reply, warp::Rejection> {
    Ok(get_public_home())
}
