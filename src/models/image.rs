use serde::{Deserialize, Serialize};

use super::settings::AspectRatio;

/// A generated or edited artifact. `base64` is a fully-formed displayable
/// reference: either a remote URL (placeholders only) or a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub base64: String,
}

/// Normalized parameters for one generate call, produced by the session
/// controller from the current settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub number_of_images: u8,
    pub aspect_ratio: AspectRatio,
}

/// The placeholder grid shown before the first generation and restored when
/// a generation fails. Never persisted, never edited.
pub fn sample_images() -> Vec<GeneratedImage> {
    vec![
        GeneratedImage {
            id: "sample-1".to_string(),
            base64: "https://picsum.photos/seed/a/1024/1024".to_string(),
        },
        GeneratedImage {
            id: "sample-2".to_string(),
            base64: "https://picsum.photos/seed/b/1024/1024".to_string(),
        },
        GeneratedImage {
            id: "sample-3".to_string(),
            base64: "https://picsum.photos/seed/c/1024/1024".to_string(),
        },
        GeneratedImage {
            id: "sample-4".to_string(),
            base64: "https://picsum.photos/seed/d/1024/1024".to_string(),
        },
    ]
}

// Imagen predict wire types.

#[derive(Debug, Serialize)]
pub struct ImagenRequest {
    pub instances: Vec<ImagenInstance>,
    pub parameters: ImagenParameters,
}

#[derive(Debug, Serialize)]
pub struct ImagenInstance {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenParameters {
    pub sample_count: u8,
    pub aspect_ratio: String,
    pub output_mime_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ImagenResponse {
    #[serde(default)]
    pub predictions: Vec<ImagenPrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenPrediction {
    pub bytes_base64_encoded: String,
    pub mime_type: Option<String>,
}
