use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Error)]
pub enum GenerateImageError {
    #[error("failed to refine prompt: {0}")]
    Refiner(String),
    #[error("failed to create image generation job: {0}")]
    Submission(String),
    #[error("image generation job ended with status '{0}'")]
    JobFailed(String),
    #[error("image generation job was still pending after {0}ms")]
    Timeout(u64),
    #[error("image generation job was canceled")]
    Canceled,
    #[error("failed to check image generation job: {0}")]
    Poll(String),
    #[error("image generation job returned a malformed result: {0}")]
    MalformedResponse(String),
}

impl GenerateImageError {
    pub fn to_api_error(&self) -> ApiError {
        match *self {
            Self::Refiner(_) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to refine prompt.".to_string(),
            },
            Self::Submission(_) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to create image generation job.".to_string(),
            },
            Self::JobFailed(_) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Image generation job failed.".to_string(),
            },
            Self::Timeout(_) => ApiError {
                code: StatusCode::GATEWAY_TIMEOUT,
                message: "Timed out waiting for image generation job.".to_string(),
            },
            Self::Canceled => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image generation was canceled.".to_string(),
            },
            Self::Poll(_) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to check image generation job.".to_string(),
            },
            Self::MalformedResponse(_) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Image generation job returned no image.".to_string(),
            },
        }
    }
}
