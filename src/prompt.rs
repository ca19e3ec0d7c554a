use crate::models::{AspectRatio, GenerationSettings};

/// Composes the full generation instruction from the settings panel state.
///
/// Fixed order: prompt, style, quality, then an "avoiding ..." clause when a
/// negative prompt is present. No escaping; the service handles free text.
pub fn compose_prompt(settings: &GenerationSettings) -> String {
    let mut prompt = format!(
        "{}, {}, {} quality",
        settings.prompt, settings.style, settings.quality
    );
    if !settings.negative_prompt.is_empty() {
        prompt.push_str(&format!(", avoiding {}", settings.negative_prompt));
    }
    prompt
}

/// Substitutes UI aspect ratios the service does not support with the
/// nearest supported one. 4:5 maps to 3:4; everything else passes through.
pub fn map_aspect_ratio(ratio: AspectRatio) -> AspectRatio {
    match ratio {
        AspectRatio::Portrait => AspectRatio::TallPortrait,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quality;

    fn settings() -> GenerationSettings {
        GenerationSettings {
            prompt: "a red fox".to_string(),
            negative_prompt: String::new(),
            style: "Anime".to_string(),
            number_of_images: 2,
            quality: Quality::FourK,
            aspect_ratio: AspectRatio::Portrait,
        }
    }

    #[test]
    fn composes_prompt_style_and_quality_in_order() {
        assert_eq!(compose_prompt(&settings()), "a red fox, Anime, 4K quality");
    }

    #[test]
    fn prompt_is_always_the_prefix() {
        let mut s = settings();
        s.prompt = "city at night".to_string();
        s.style = "Cyberpunk".to_string();
        s.quality = Quality::EightK;
        let composed = compose_prompt(&s);
        assert!(composed.starts_with("city at night"));
        assert!(composed.contains("Cyberpunk"));
        assert!(composed.contains("8K"));
    }

    #[test]
    fn avoiding_clause_appears_iff_negative_prompt_set() {
        let mut s = settings();
        assert!(!compose_prompt(&s).contains("avoiding"));

        s.negative_prompt = "blur, text".to_string();
        assert_eq!(
            compose_prompt(&s),
            "a red fox, Anime, 4K quality, avoiding blur, text"
        );
    }

    #[test]
    fn portrait_maps_to_nearest_supported_ratio() {
        assert_eq!(
            map_aspect_ratio(AspectRatio::Portrait),
            AspectRatio::TallPortrait
        );
    }

    #[test]
    fn all_other_ratios_pass_through() {
        for ratio in AspectRatio::ALL {
            if ratio != AspectRatio::Portrait {
                assert_eq!(map_aspect_ratio(ratio), ratio);
            }
        }
    }
}
