pub mod image_client;
pub mod text_client;

use crate::{
    config::{
        GeminiConfig, DEFAULT_BASE_URL, DEFAULT_EDIT_MODEL, DEFAULT_IMAGE_MODEL,
        DEFAULT_TEXT_MODEL,
    },
    error::{Result, StudioError},
    gateway::CreativeGateway,
    models::{GeneratedImage, ImageGenerationRequest},
};
use async_trait::async_trait;

pub use image_client::ImageClient;
pub use text_client::TextClient;

/// Live client for the Gemini REST API. Stateless between calls; the only
/// shared piece is the HTTP connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
    text_client: TextClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| StudioError::ConfigError("GEMINI_API_KEY is not set".into()))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let image_model = config
            .image_model
            .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());
        let edit_model = config
            .edit_model
            .unwrap_or_else(|| DEFAULT_EDIT_MODEL.to_string());
        let text_model = config
            .text_model
            .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string());

        let http = reqwest::Client::new();

        Ok(Self {
            image_client: ImageClient::new(
                http.clone(),
                api_key.clone(),
                base_url.clone(),
                image_model,
                edit_model,
            ),
            text_client: TextClient::new(http, api_key, base_url, text_model),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }
}

#[async_trait]
impl CreativeGateway for GeminiClient {
    async fn generate_images(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<Vec<GeneratedImage>> {
        self.image_client.generate(request).await
    }

    async fn edit_image(&self, source_uri: &str, instruction: &str) -> Result<String> {
        self.image_client.edit(source_uri, instruction).await
    }

    async fn suggest_prompt(&self, prompt: &str) -> Result<String> {
        self.text_client.suggest(prompt).await
    }

    async fn chat(&self, prompt: &str, image_uri: Option<&str>) -> Result<String> {
        self.text_client.chat(prompt, image_uri).await
    }
}
