use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub messages: Vec<InputSpecMessage>,
    pub temperature: f32,
    pub max_tokens: u16,
}

#[derive(Debug, Serialize)]
pub struct InputSpecMessage {
    pub role: String,
    pub content: String,
}
