use crate::error::Result;
use crate::models::{GeneratedImage, ImageGenerationRequest};
use async_trait::async_trait;

/// The boundary to the external AI capability. One request, one response,
/// no retries, no state between calls. The session controller only depends
/// on this trait; `gemini::GeminiClient` is the live implementation.
#[async_trait]
pub trait CreativeGateway: Send + Sync {
    /// Generates a fresh batch. Any error is total batch failure.
    async fn generate_images(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<Vec<GeneratedImage>>;

    /// Edits a single image given its data URI and an instruction. Returns
    /// the new data URI; the caller keeps the artifact id.
    async fn edit_image(&self, source_uri: &str, instruction: &str) -> Result<String>;

    /// Elaborates a bare prompt idea into a detailed one.
    async fn suggest_prompt(&self, prompt: &str) -> Result<String>;

    /// Free-form assistant chat with an optional inline image attachment.
    async fn chat(&self, prompt: &str, image_uri: Option<&str>) -> Result<String>;
}
