use base64::{engine::general_purpose::STANDARD, Engine as _};
use pixelmuse::{
    AspectRatio, DataUri, GeminiClient, GeminiConfig, Quality, StudioSession,
};
use std::env;
use std::fs;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    pixelmuse::logger::init_with_config(
        pixelmuse::logger::LoggerConfig::development()
            .with_level(pixelmuse::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking Gemini environment...");
    match env::var("GEMINI_API_KEY") {
        Ok(key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!("API key starts with: {}...", &key[..6.min(key.len())]);
        }
        Err(_) => {
            log::error!("❌ GEMINI_API_KEY is not set, requests will fail");
        }
    }

    log::info!("🔄 Creating Gemini client...");
    let client = match GeminiClient::new(GeminiConfig::from_env()) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    let mut session = StudioSession::new(Arc::new(client));

    let mut prefs = pixelmuse::MemoryPreferenceStore::new();
    let theme = pixelmuse::prefs::load_theme(&prefs);
    log::info!("🎛️  Theme preference: {}", theme.as_str());
    pixelmuse::prefs::store_theme(&mut prefs, theme.toggled());

    // Test 1: prompt enhancement
    log::info!("✨ Testing prompt enhancement...");
    {
        let settings = session.settings_mut();
        settings.prompt = "a lighthouse in a storm".to_string();
        settings.style = "Cinematic".to_string();
        settings.quality = Quality::FourK;
        settings.number_of_images = 2;
        settings.aspect_ratio = AspectRatio::Widescreen;
    }
    session.enhance_prompt().await;
    log::info!("📝 Prompt after enhancement: {}", session.settings().prompt);

    // Test 2: image generation
    log::info!("🎨 Testing image generation...");
    session.generate().await;

    if let Some(error) = session.error() {
        log::error!("❌ Generation surface reported: {}", error);
    } else {
        log::info!("✅ Generated {} image(s)", session.images().len());
        for image in session.images() {
            match DataUri::parse(&image.base64) {
                Ok(uri) => {
                    let extension = uri.mime_type.split('/').nth(1).unwrap_or("png");
                    let filename = format!(
                        "generated_{}_{}.{}",
                        image.id,
                        chrono::Utc::now().timestamp(),
                        extension
                    );
                    match STANDARD.decode(&uri.data) {
                        Ok(bytes) => match fs::write(&filename, bytes) {
                            Ok(_) => log::info!("💾 Image saved to: {}", filename),
                            Err(e) => log::error!("❌ Failed to save image: {}", e),
                        },
                        Err(e) => log::error!("❌ Failed to decode base64 image: {}", e),
                    }
                }
                Err(_) => {
                    log::info!("🌐 Placeholder image {} at {}", image.id, image.base64);
                }
            }
        }
    }

    // Test 3: assistant chat
    log::info!("💬 Testing assistant chat...");
    session
        .send_chat("How could I make this scene feel more dramatic?", None)
        .await;
    if let Some(reply) = session.messages().last() {
        log::info!("🤖 Assistant: {}", reply.text);
    }

    log::info!("🎉 All smoke tests completed!");
    Ok(())
}
