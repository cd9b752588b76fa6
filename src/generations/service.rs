use axum::http::StatusCode;
use tokio_util::sync::CancellationToken;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::{chat, dalle},
    dtos::generate_image_dto::GenerateImageDto,
    models::generated_image::GeneratedImage,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    cancellation_token: &CancellationToken,
    state: &AppState,
) -> Result<GeneratedImage, ApiError> {
    let dto = dto.sanitized();

    if dto.description.is_empty() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "description must not be empty.".to_string(),
        });
    }

    let prompt =
        match chat::service::refine_prompt(&dto.description, &state.envy, &state.http_client).await
        {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!("generate_image failed refine_prompt: {}", e);
                return Err(e.to_api_error());
            }
        };

    let url = match dalle::service::await_image_url(
        &prompt,
        &state.envy,
        &state.http_client,
        cancellation_token,
    )
    .await
    {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("generate_image failed await_image_url: {}", e);
            return Err(e.to_api_error());
        }
    };

    Ok(GeneratedImage::new(prompt, url))
}
