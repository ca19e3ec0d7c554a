use std::fmt;

#[derive(Debug)]
pub enum StudioError {
    ConfigError(String),
    GenerationError(String),
    EditError(String),
    SuggestionError(String),
    ChatError(String),
    DataUriError(String),
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            StudioError::GenerationError(msg) => write!(f, "Image generation error: {}", msg),
            StudioError::EditError(msg) => write!(f, "Image edit error: {}", msg),
            StudioError::SuggestionError(msg) => write!(f, "Prompt suggestion error: {}", msg),
            StudioError::ChatError(msg) => write!(f, "Assistant chat error: {}", msg),
            StudioError::DataUriError(msg) => write!(f, "Data URI error: {}", msg),
        }
    }
}

impl std::error::Error for StudioError {}

pub type Result<T> = std::result::Result<T, StudioError>;
