pub mod config;
pub mod datauri;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod prefs;
pub mod prompt;
pub mod session;

pub use config::GeminiConfig;
pub use datauri::DataUri;
pub use error::{Result, StudioError};
pub use gateway::CreativeGateway;
pub use gemini::{GeminiClient, ImageClient, TextClient};
pub use models::{
    sample_images, style_catalog, AspectRatio, ChatMessage, ChatRole, GeneratedImage,
    GenerationSettings, ImageGenerationRequest, Quality,
};
pub use prefs::{MemoryPreferenceStore, PreferenceStore, Theme};
pub use prompt::{compose_prompt, map_aspect_ratio};
pub use session::StudioSession;
