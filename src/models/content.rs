use serde::{Deserialize, Serialize};

/// Wire types for the `generateContent` capability, shared by the edit,
/// suggestion, and chat operations.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
        }
    }
}

/// One content part. Responses are scanned for the first variant of
/// interest in declaration order; unrecognized part shapes fall through to
/// `Other` and are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    InlineImage {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
    Other(serde_json::Value),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineImage {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}

impl GenerationConfig {
    pub fn image_only() -> Self {
        Self {
            response_modalities: Some(vec!["IMAGE".to_string()]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().and_then(|candidate| {
            candidate.content.parts.iter().find_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
        })
    }

    /// First inline-image part of the first candidate, if any.
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.candidates.first().and_then(|candidate| {
            candidate.content.parts.iter().find_map(|part| match part {
                Part::InlineImage { inline_data } => Some(inline_data),
                _ => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_image_part_wins_over_text_when_scanning() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here is your edit"},
                        {"inlineData": {"mimeType": "image/webp", "data": "Zm9v"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();

        let inline = response.first_inline_image().unwrap();
        assert_eq!(inline.mime_type, "image/webp");
        assert_eq!(inline.data, "Zm9v");
        assert_eq!(response.first_text(), Some("here is your edit"));
    }

    #[test]
    fn text_only_response_has_no_inline_image() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.first_inline_image().is_none());
        assert_eq!(response.first_text(), Some("hello"));
    }

    #[test]
    fn unknown_part_shapes_are_skipped() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"functionCall": {"name": "noop"}},
                        {"text": "after the odd part"}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_text(), Some("after the odd part"));
    }

    #[test]
    fn empty_response_yields_nothing() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
        assert!(response.first_inline_image().is_none());
    }

    #[test]
    fn request_serializes_inline_data_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::from_parts(vec![
                Part::inline_image("image/png", "AAAA"),
                Part::text("make it night"),
            ])],
            generation_config: Some(GenerationConfig::image_only()),
            system_instruction: None,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(json["contents"][0]["parts"][1]["text"], "make it night");
        assert_eq!(
            json["generationConfig"]["responseModalities"][0],
            "IMAGE"
        );
        assert!(json.get("systemInstruction").is_none());
    }
}
