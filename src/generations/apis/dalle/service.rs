use std::time::Duration;

use reqwest::header;
use tokio::time::sleep;
use tokio_retry::{strategy::FixedInterval, Retry};
use tokio_util::sync::CancellationToken;

use crate::{app::env::Envy, generations::errors::GenerateImageError};

use super::{
    config::{
        API_VERSION, DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_TIMEOUT_MS, IMAGE_COUNT, IMAGE_SIZE,
        OPERATION_LOCATION_HEADER,
    },
    enums::dalle_job_status::DalleJobStatus,
    models::input_spec::InputSpec,
    structs::dalle_job_response::DalleJobResponse,
};

pub async fn await_image_url(
    prompt: &str,
    envy: &Envy,
    client: &reqwest::Client,
    cancellation_token: &CancellationToken,
) -> Result<String, GenerateImageError> {
    let operation_url = match submit_job(prompt, envy, client).await {
        Ok(operation_url) => operation_url,
        Err(e) => return Err(e),
    };

    await_job_completion(&operation_url, envy, client, cancellation_token).await
}

async fn submit_job(
    prompt: &str,
    envy: &Envy,
    client: &reqwest::Client,
) -> Result<String, GenerateImageError> {
    let input_spec = provide_input_spec(prompt);

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert("api-key", envy.azure_oai_key.parse().unwrap());

    let url = format!(
        "{}openai/images/generations:submit?api-version={}",
        envy.azure_oai_endpoint, API_VERSION
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
                return Err(GenerateImageError::Submission(format!(
                    "received status {}",
                    res.status()
                )));
            }

            let Some(operation_location) = res.headers().get(OPERATION_LOCATION_HEADER)
            else {
                return Err(GenerateImageError::Submission(
                    "response had no operation-location header".to_string(),
                ));
            };

            match operation_location.to_str() {
                Ok(operation_url) => Ok(operation_url.to_string()),
                Err(e) => Err(GenerateImageError::Submission(e.to_string())),
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(GenerateImageError::Submission(e.to_string()))
        }
    }
}

async fn await_job_completion(
    operation_url: &str,
    envy: &Envy,
    client: &reqwest::Client,
    cancellation_token: &CancellationToken,
) -> Result<String, GenerateImageError> {
    let poll_interval_ms = envy.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
    let poll_timeout_ms = envy.poll_timeout_ms.unwrap_or(DEFAULT_POLL_TIMEOUT_MS);

    let mut elapsed_ms: u64 = 0;

    loop {
        if elapsed_ms >= poll_timeout_ms {
            tracing::error!("job at {} ran out of time", operation_url);
            return Err(GenerateImageError::Timeout(poll_timeout_ms));
        }

        tokio::select! {
            _ = cancellation_token.cancelled() => {
                return Err(GenerateImageError::Canceled);
            }
            _ = sleep(Duration::from_millis(poll_interval_ms)) => {}
        }

        elapsed_ms += poll_interval_ms;

        let job = match get_job_with_retry(operation_url, envy, client).await {
            Ok(job) => job,
            Err(e) => return Err(e),
        };

        if job.status == DalleJobStatus::Succeeded.value() {
            return provide_image_url(job);
        }

        if job.status == DalleJobStatus::Failed.value()
            || job.status == DalleJobStatus::Canceled.value()
            || job.status == DalleJobStatus::Deleted.value()
        {
            tracing::error!("job at {} ended with status {}", operation_url, job.status);
            return Err(GenerateImageError::JobFailed(job.status));
        }

        tracing::debug!(
            "job at {} still {}, checking again in {}ms",
            operation_url,
            job.status,
            poll_interval_ms
        );
    }
}

fn provide_image_url(job: DalleJobResponse) -> Result<String, GenerateImageError> {
    let Some(result) = job.result
    else {
        return Err(GenerateImageError::MalformedResponse(
            "job succeeded without a result".to_string(),
        ));
    };

    let Some(image) = result.data.into_iter().next()
    else {
        return Err(GenerateImageError::MalformedResponse(
            "job result had no images".to_string(),
        ));
    };

    match image.url {
        Some(url) => Ok(url),
        None => Err(GenerateImageError::MalformedResponse(
            "job result had no image url".to_string(),
        )),
    }
}

async fn get_job_with_retry(
    operation_url: &str,
    envy: &Envy,
    client: &reqwest::Client,
) -> Result<DalleJobResponse, GenerateImageError> {
    let retry_strategy = FixedInterval::from_millis(10000).take(3);

    Retry::spawn(retry_strategy, || async {
        get_job(operation_url, envy, client).await
    })
    .await
}

async fn get_job(
    operation_url: &str,
    envy: &Envy,
    client: &reqwest::Client,
) -> Result<DalleJobResponse, GenerateImageError> {
    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert("api-key", envy.azure_oai_key.parse().unwrap());

    let result = client.get(operation_url).headers(headers).send().await;

    match result {
        Ok(res) => {
            if !res.status().is_success() {
                return Err(GenerateImageError::Poll(format!(
                    "received status {}",
                    res.status()
                )));
            }

            match res.text().await {
                Ok(text) => match serde_json::from_str::<DalleJobResponse>(&text) {
                    Ok(dalle_job_response) => Ok(dalle_job_response),
                    Err(_) => {
                        tracing::error!(%text);
                        Err(GenerateImageError::MalformedResponse(
                            "could not parse job response".to_string(),
                        ))
                    }
                },
                Err(e) => {
                    tracing::error!(%e);
                    Err(GenerateImageError::Poll(e.to_string()))
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(GenerateImageError::Poll(e.to_string()))
        }
    }
}

fn provide_input_spec(prompt: &str) -> InputSpec {
    InputSpec {
        prompt: prompt.to_string(),
        n: IMAGE_COUNT,
        size: IMAGE_SIZE.to_string(),
    }
}
