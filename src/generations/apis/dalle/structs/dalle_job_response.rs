use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DalleJobResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<DalleJobResult>,
}

#[derive(Debug, Deserialize)]
pub struct DalleJobResult {
    pub data: Vec<DalleJobImage>,
}

#[derive(Debug, Deserialize)]
pub struct DalleJobImage {
    #[serde(default)]
    pub url: Option<String>,
}
