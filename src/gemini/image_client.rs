use crate::{
    datauri::DataUri,
    error::{Result, StudioError},
    models::{
        Content, GenerateContentRequest, GenerateContentResponse, GeneratedImage,
        GenerationConfig, ImageGenerationRequest, ImagenInstance, ImagenParameters,
        ImagenRequest, ImagenResponse, Part,
    },
};
use reqwest::Client;

const PNG_MIME: &str = "image/png";

#[derive(Clone)]
pub struct ImageClient {
    http: Client,
    api_key: String,
    base_url: String,
    image_model: String,
    edit_model: String,
}

impl ImageClient {
    pub fn new(
        http: Client,
        api_key: String,
        base_url: String,
        image_model: String,
        edit_model: String,
    ) -> Self {
        Self {
            http,
            api_key,
            base_url,
            image_model,
            edit_model,
        }
    }

    /// One predict round trip. Requests exactly `number_of_images` PNG
    /// outputs at the target ratio and wraps each prediction as a data URI
    /// with a batch-unique id.
    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<Vec<GeneratedImage>> {
        let payload = ImagenRequest {
            instances: vec![ImagenInstance {
                prompt: request.prompt.clone(),
            }],
            parameters: ImagenParameters {
                sample_count: request.number_of_images,
                aspect_ratio: request.aspect_ratio.to_string(),
                output_mime_type: PNG_MIME.to_string(),
            },
        };

        let url = format!("{}/models/{}:predict", self.base_url, self.image_model);
        log::info!(
            "Generating {} image(s) with model: {}",
            request.number_of_images,
            self.image_model
        );
        log::debug!(
            "Image generation request payload: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StudioError::GenerationError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Image generation failed with HTTP {}: {}", status, body);
            return Err(StudioError::GenerationError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let imagen_response: ImagenResponse = response
            .json()
            .await
            .map_err(|e| StudioError::GenerationError(e.to_string()))?;

        if imagen_response.predictions.is_empty() {
            return Err(StudioError::GenerationError(
                "service returned no images".into(),
            ));
        }

        let stamp = chrono::Utc::now().timestamp_millis();
        let images = imagen_response
            .predictions
            .into_iter()
            .enumerate()
            .map(|(index, prediction)| {
                let mime_type = prediction
                    .mime_type
                    .unwrap_or_else(|| PNG_MIME.to_string());
                GeneratedImage {
                    id: format!("gen-{}-{}", stamp, index),
                    base64: DataUri::new(mime_type, prediction.bytes_base64_encoded).to_uri(),
                }
            })
            .collect();

        Ok(images)
    }

    /// One image-conditioned edit round trip, restricted to image output.
    /// The source MIME type comes from the source data URI; the result MIME
    /// type comes from the response's own inline-data part.
    pub async fn edit(&self, source_uri: &str, instruction: &str) -> Result<String> {
        let source =
            DataUri::parse(source_uri).map_err(|e| StudioError::EditError(e.to_string()))?;

        let payload = GenerateContentRequest {
            contents: vec![Content::from_parts(vec![
                Part::inline_image(source.mime_type, source.data),
                Part::text(instruction),
            ])],
            generation_config: Some(GenerationConfig::image_only()),
            system_instruction: None,
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.edit_model
        );
        log::info!("Editing image with model: {}", self.edit_model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StudioError::EditError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Image edit failed with HTTP {}: {}", status, body);
            return Err(StudioError::EditError(format!("HTTP {}: {}", status, body)));
        }

        let content_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| StudioError::EditError(e.to_string()))?;

        let inline = content_response
            .first_inline_image()
            .ok_or_else(|| StudioError::EditError("no image data in response".into()))?;

        Ok(DataUri::new(inline.mime_type.clone(), inline.data.clone()).to_uri())
    }
}
