use crate::{
    datauri::DataUri,
    error::{Result, StudioError},
    models::{Content, GenerateContentRequest, GenerateContentResponse, Part},
};
use reqwest::Client;

const ASSISTANT_SYSTEM_INSTRUCTION: &str = "You are a helpful AI assistant for an image \
generation application. Your goal is to help users refine their prompts, suggest styles, \
and give feedback to create better images. Be concise and encouraging.";

#[derive(Clone)]
pub struct TextClient {
    http: Client,
    api_key: String,
    base_url: String,
    text_model: String,
}

impl TextClient {
    pub fn new(http: Client, api_key: String, base_url: String, text_model: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
            text_model,
        }
    }

    /// Elaborates a bare prompt idea into a detailed generation prompt.
    pub async fn suggest(&self, prompt: &str) -> Result<String> {
        let full_prompt = format!(
            "Based on the following user idea for an image, generate a highly detailed and \
             creative prompt for an AI image generator. Enhance the original idea with vivid \
             descriptions, artistic styles, and specific details about lighting, composition, \
             and mood. Original idea: \"{}\"",
            prompt
        );

        let payload = GenerateContentRequest {
            contents: vec![Content::text(full_prompt)],
            generation_config: None,
            system_instruction: None,
        };

        log::info!("Requesting prompt suggestion from model: {}", self.text_model);

        let response = self
            .invoke(payload)
            .await
            .map_err(StudioError::SuggestionError)?;

        let text = response
            .first_text()
            .ok_or_else(|| StudioError::SuggestionError("no text in response".into()))?;

        Ok(text.trim().to_string())
    }

    /// One assistant turn, optionally carrying an inline image attachment.
    pub async fn chat(&self, prompt: &str, image_uri: Option<&str>) -> Result<String> {
        let mut parts = vec![Part::text(prompt)];
        if let Some(uri) = image_uri {
            let attachment =
                DataUri::parse(uri).map_err(|e| StudioError::ChatError(e.to_string()))?;
            parts.push(Part::inline_image(attachment.mime_type, attachment.data));
        }

        let payload = GenerateContentRequest {
            contents: vec![Content::from_parts(parts)],
            generation_config: None,
            system_instruction: Some(Content::text(ASSISTANT_SYSTEM_INSTRUCTION)),
        };

        log::info!("Sending assistant chat turn to model: {}", self.text_model);

        let response = self.invoke(payload).await.map_err(StudioError::ChatError)?;

        let text = response
            .first_text()
            .ok_or_else(|| StudioError::ChatError("no text in response".into()))?;

        Ok(text.trim().to_string())
    }

    /// One generateContent round trip. Errors come back as plain messages
    /// so each caller can raise its own variant.
    async fn invoke(
        &self,
        payload: GenerateContentRequest,
    ) -> std::result::Result<GenerateContentResponse, String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.text_model
        );
        log::debug!(
            "Text generation request payload: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Text generation failed with HTTP {}: {}", status, body);
            return Err(format!("HTTP {}: {}", status, body));
        }

        response.json().await.map_err(|e| e.to_string())
    }
}
