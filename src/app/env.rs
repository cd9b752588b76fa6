use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub azure_oai_endpoint: String,
    pub azure_oai_key: String,
    pub azure_oai_model: String,

    pub poll_interval_ms: Option<u64>,
    pub poll_timeout_ms: Option<u64>,
}
