use reqwest::header;

use crate::{app::env::Envy, generations::errors::GenerateImageError};

use super::{
    config::{API_VERSION, MAX_TOKENS, SYSTEM_INSTRUCTION, TEMPERATURE},
    models::input_spec::{InputSpec, InputSpecMessage},
    structs::chat_completion_response::ChatCompletionResponse,
};

pub async fn refine_prompt(
    description: &str,
    envy: &Envy,
    client: &reqwest::Client,
) -> Result<String, GenerateImageError> {
    let input_spec = provide_input_spec(description);

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert("api-key", envy.azure_oai_key.parse().unwrap());

    let url = format!(
        "{}openai/deployments/{}/chat/completions?api-version={}",
        envy.azure_oai_endpoint, envy.azure_oai_model, API_VERSION
    );
    let result = client
        .post(url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => {
            if !res.status().is_success() {
                return Err(GenerateImageError::Refiner(format!(
                    "received status {}",
                    res.status()
                )));
            }

            match res.text().await {
                Ok(text) => match serde_json::from_str::<ChatCompletionResponse>(&text) {
                    Ok(chat_completion_response) => {
                        provide_refined_prompt(chat_completion_response)
                    }
                    Err(_) => {
                        tracing::error!(%text);
                        Err(GenerateImageError::Refiner(
                            "could not parse completion response".to_string(),
                        ))
                    }
                },
                Err(e) => {
                    tracing::error!(%e);
                    Err(GenerateImageError::Refiner(e.to_string()))
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(GenerateImageError::Refiner(e.to_string()))
        }
    }
}

fn provide_refined_prompt(
    response: ChatCompletionResponse,
) -> Result<String, GenerateImageError> {
    let Some(choice) = response.choices.into_iter().next()
    else {
        return Err(GenerateImageError::Refiner(
            "completion had no choices".to_string(),
        ));
    };

    let Some(content) = choice.message.content
    else {
        return Err(GenerateImageError::Refiner(
            "completion had no content".to_string(),
        ));
    };

    let prompt = content.trim().to_string();

    if prompt.is_empty() {
        return Err(GenerateImageError::Refiner(
            "completion was empty".to_string(),
        ));
    }

    Ok(prompt)
}

fn provide_input_spec(description: &str) -> InputSpec {
    InputSpec {
        messages: vec![
            InputSpecMessage {
                role: "system".to_string(),
                content: SYSTEM_INSTRUCTION.to_string(),
            },
            InputSpecMessage {
                role: "user".to_string(),
                content: description.to_string(),
            },
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

#[cfg(test)]
mod tests {
    use std::{net::TcpListener, sync::Arc};

    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use crate::app::env::Envy;
    use crate::generations::errors::GenerateImageError;

    use super::refine_prompt;

    fn test_envy(endpoint: String) -> Envy {
        Envy {
            app_env: "test".to_string(),
            port: None,
            azure_oai_endpoint: endpoint,
            azure_oai_key: "test-key".to_string(),
            azure_oai_model: "gpt-test".to_string(),
            poll_interval_ms: Some(10),
            poll_timeout_ms: Some(1000),
        }
    }

    async fn chat_completions_stub(
        State(stub): State<Arc<(StatusCode, Value)>>,
    ) -> (StatusCode, Json<Value>) {
        (stub.0, Json(stub.1.clone()))
    }

    async fn spawn_chat_stub(status: StatusCode, response: Value) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let router = Router::new()
            .route(
                "/openai/deployments/:model/chat/completions",
                post(chat_completions_stub),
            )
            .with_state(Arc::new((status, response)));

        tokio::spawn(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(router.into_make_service())
                .await
                .unwrap();
        });

        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn returns_first_choice_content() {
        let endpoint = spawn_chat_stub(
            StatusCode::OK,
            json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "A photorealistic cat wearing an astronaut suit floating in space" } },
                    { "message": { "role": "assistant", "content": "a different prompt" } }
                ]
            }),
        )
        .await;
        let envy = test_envy(endpoint);
        let client = reqwest::Client::new();

        let prompt = refine_prompt("a cat astronaut", &envy, &client)
            .await
            .unwrap();

        assert_eq!(
            prompt,
            "A photorealistic cat wearing an astronaut suit floating in space"
        );
    }

    #[tokio::test]
    async fn errors_when_completion_has_no_choices() {
        let endpoint = spawn_chat_stub(StatusCode::OK, json!({ "choices": [] })).await;
        let envy = test_envy(endpoint);
        let client = reqwest::Client::new();

        let result = refine_prompt("a cat astronaut", &envy, &client).await;

        assert!(matches!(result, Err(GenerateImageError::Refiner(_))));
    }

    #[tokio::test]
    async fn errors_instead_of_returning_an_empty_prompt() {
        let endpoint = spawn_chat_stub(
            StatusCode::OK,
            json!({ "choices": [{ "message": { "role": "assistant", "content": "   " } }] }),
        )
        .await;
        let envy = test_envy(endpoint);
        let client = reqwest::Client::new();

        let result = refine_prompt("a cat astronaut", &envy, &client).await;

        assert!(matches!(result, Err(GenerateImageError::Refiner(_))));
    }

    #[tokio::test]
    async fn errors_on_non_success_status() {
        let endpoint =
            spawn_chat_stub(StatusCode::UNAUTHORIZED, json!({ "error": "bad key" })).await;
        let envy = test_envy(endpoint);
        let client = reqwest::Client::new();

        let result = refine_prompt("a cat astronaut", &envy, &client).await;

        assert!(matches!(result, Err(GenerateImageError::Refiner(_))));
    }
}
