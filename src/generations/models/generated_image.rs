use serde::{Deserialize, Serialize};

pub static MAX_DISPLAY_PROMPT_WORDS: usize = 25;
pub static DISPLAY_PROMPT_PREFIX: &str = "Regenerated Prompt: ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
    pub prompt: String,
    pub display_prompt: String,
}

impl GeneratedImage {
    pub fn new(prompt: String, url: String) -> Self {
        let display_prompt = [
            DISPLAY_PROMPT_PREFIX,
            &truncate_to_words(&prompt, MAX_DISPLAY_PROMPT_WORDS),
        ]
        .concat();

        return Self {
            url,
            prompt,
            display_prompt,
        };
    }
}

fn truncate_to_words(text: &str, max_words: usize) -> String {
    return text
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<&str>>()
        .join(" ");
}
