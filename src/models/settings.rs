use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolution tier requested by the user. Rendered into the composed prompt,
/// not sent as a service parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
    #[serde(rename = "8K")]
    EightK,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::TwoK => "2K",
            Quality::FourK => "4K",
            Quality::EightK => "8K",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect ratios accepted by the UI. A superset of what the image service
/// supports natively; see `prompt::map_aspect_ratio` for the substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "3:4")]
    TallPortrait,
    #[serde(rename = "4:3")]
    Landscape,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 6] = [
        AspectRatio::Square,
        AspectRatio::Widescreen,
        AspectRatio::Vertical,
        AspectRatio::Portrait,
        AspectRatio::TallPortrait,
        AspectRatio::Landscape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Portrait => "4:5",
            AspectRatio::TallPortrait => "3:4",
            AspectRatio::Landscape => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the settings panel edits. Owned by the session controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub prompt: String,
    pub negative_prompt: String,
    pub style: String,
    pub number_of_images: u8,
    pub quality: Quality,
    pub aspect_ratio: AspectRatio,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        GenerationSettings {
            prompt: String::new(),
            negative_prompt: String::new(),
            style: "Photorealistic".to_string(),
            number_of_images: 4,
            quality: Quality::FourK,
            aspect_ratio: AspectRatio::Square,
        }
    }
}

/// The fixed style taxonomy, grouped the way the settings panel presents it.
pub fn style_catalog() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        (
            "Realistic & Photography",
            &[
                "Realistic",
                "Hyper-Realistic",
                "Photorealistic",
                "Cinematic",
                "HDR",
                "Portrait",
                "Macro",
                "Street",
                "Studio Lighting",
            ],
        ),
        (
            "Artistic & Painting",
            &[
                "Digital Painting",
                "Oil Painting",
                "Watercolor",
                "Ink Drawing",
                "Sketch",
                "Acrylic",
                "Pastel Art",
            ],
        ),
        (
            "Cartoon & Animation",
            &[
                "Cartoon",
                "Comic",
                "Anime",
                "Manga",
                "Chibi",
                "Pixar Style",
                "Disney Style",
                "2D Animation",
                "Cel Shaded",
            ],
        ),
        (
            "Fantasy & Sci-Fi",
            &[
                "Fantasy",
                "Sci-Fi",
                "Futuristic",
                "Cyberpunk",
                "Steampunk",
                "Space / Galaxy",
            ],
        ),
        (
            "Mood & Lighting",
            &[
                "Golden Hour",
                "Moody",
                "Dark",
                "Soft Light",
                "Vibrant",
                "Colorful",
                "Monochrome",
                "Black & White",
                "Neon",
                "Glowing",
            ],
        ),
        (
            "Design & Conceptual",
            &[
                "Minimalist",
                "Abstract",
                "Surreal",
                "Concept Art",
                "Pop Art",
                "Vector Art",
            ],
        ),
    ]
}
