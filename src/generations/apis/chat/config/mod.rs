pub static API_VERSION: &str = "2023-05-15";

pub static SYSTEM_INSTRUCTION: &str = "You are an expert at generating image-generation prompts";
pub static TEMPERATURE: f32 = 0.7;
pub static MAX_TOKENS: u16 = 120;
