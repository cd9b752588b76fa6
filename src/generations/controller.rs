use axum::{extract::State, http::StatusCode, Json};
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, models::generated_image::GeneratedImage, service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GeneratedImage>, ApiError> {
    match dto.validate() {
        Ok(_) => {
            let cancellation_token = CancellationToken::new();

            match service::generate_image(&dto, &cancellation_token, &state).await {
                Ok(generated_image) => Ok(Json(generated_image)),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
