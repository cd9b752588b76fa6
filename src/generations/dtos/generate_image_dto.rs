use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "description must be between 1 and 1000 characters."
    ))]
    pub description: String,
}

impl GenerateImageDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            description: self
                .description
                .trim()
                .replace("\n", " ")
                .replace("\r", " "),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_strips_surrounding_whitespace_and_newlines() {
        let dto = GenerateImageDto {
            description: "  a cat\nastronaut\r\n ".to_string(),
        };

        assert_eq!(dto.sanitized().description, "a cat astronaut");
    }
}
