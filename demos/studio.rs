use pixelmuse::{AspectRatio, GeminiClient, GeminiConfig, Quality, StudioSession};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    pixelmuse::logger::init()?;

    let client = GeminiClient::new(GeminiConfig::from_env())?;

    let suggestion = client
        .text()
        .suggest("a tiny robot tending a rooftop garden")
        .await?;
    log::info!("Suggested prompt: {}", suggestion);

    let mut session = StudioSession::new(Arc::new(client.clone()));

    {
        let settings = session.settings_mut();
        settings.prompt = "a tiny robot tending a rooftop garden".to_string();
        settings.style = "Digital Painting".to_string();
        settings.quality = Quality::TwoK;
        settings.number_of_images = 1;
        settings.aspect_ratio = AspectRatio::Square;
    }

    session.generate().await;

    match session.error() {
        Some(error) => log::error!("Generation failed: {}", error),
        None => {
            for image in session.images() {
                log::info!("Generated image {} ({} bytes of URI)", image.id, image.base64.len());
            }
        }
    }

    Ok(())
}
