use crate::{
    gateway::CreativeGateway,
    models::{
        sample_images, ChatMessage, GeneratedImage, GenerationSettings, ImageGenerationRequest,
    },
    prompt::{compose_prompt, map_aspect_ratio},
};
use std::sync::Arc;

const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate images. Please check your prompt or API key.";
const EDIT_FAILED_MESSAGE: &str = "Failed to edit the image.";
const SUGGESTION_FAILED_MESSAGE: &str = "Failed to get prompt suggestion.";
const CHAT_FALLBACK_MESSAGE: &str = "Sorry, I'm having trouble connecting right now.";
const GREETING_MESSAGE: &str =
    "Hello! I'm your creative assistant. How can I help you brainstorm an amazing image prompt today?";

/// In-memory state owner for one studio session: the active generation
/// batch, the assistant transcript, and the pending/error flags per surface.
///
/// Every flow catches its own gateway error and converts it into a
/// user-visible message plus a defined state restoration; nothing propagates
/// past this layer. Mutual exclusion per surface is an advisory boolean
/// checked synchronously before dispatch; a request on a busy surface is
/// rejected outright, never queued.
pub struct StudioSession {
    gateway: Arc<dyn CreativeGateway>,
    settings: GenerationSettings,
    images: Vec<GeneratedImage>,
    messages: Vec<ChatMessage>,
    generation_pending: bool,
    chat_pending: bool,
    error: Option<String>,
    next_message_id: u64,
}

impl StudioSession {
    pub fn new(gateway: Arc<dyn CreativeGateway>) -> Self {
        let mut session = Self {
            gateway,
            settings: GenerationSettings::default(),
            images: sample_images(),
            messages: Vec::new(),
            generation_pending: false,
            chat_pending: false,
            error: None,
            next_message_id: 0,
        };
        let greeting_id = session.allocate_message_id();
        session
            .messages
            .push(ChatMessage::assistant(greeting_id, GREETING_MESSAGE));
        session
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut GenerationSettings {
        &mut self.settings
    }

    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_generating(&self) -> bool {
        self.generation_pending
    }

    pub fn is_chat_pending(&self) -> bool {
        self.chat_pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// How many loading placeholders the grid should show while a
    /// generation is pending. Matches the eventual result count.
    pub fn loading_count(&self) -> usize {
        if self.generation_pending {
            self.settings.number_of_images as usize
        } else {
            0
        }
    }

    /// Runs one generation batch. Rejected while the grid is busy or the
    /// prompt is empty. On failure the placeholder set is restored so the
    /// grid is never blank.
    pub async fn generate(&mut self) {
        if self.settings.prompt.is_empty() || self.generation_pending {
            return;
        }

        self.generation_pending = true;
        self.error = None;
        self.images.clear();

        let request = ImageGenerationRequest {
            prompt: compose_prompt(&self.settings),
            number_of_images: self.settings.number_of_images,
            aspect_ratio: map_aspect_ratio(self.settings.aspect_ratio),
        };

        match self.gateway.generate_images(request).await {
            Ok(images) => {
                self.images = images;
            }
            Err(e) => {
                log::error!("Generation failed: {}", e);
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
                self.images = sample_images();
            }
        }

        self.generation_pending = false;
    }

    /// Edits one image in place by id. On success only the target entry is
    /// replaced (same id, new payload); on failure the whole set is left
    /// untouched.
    pub async fn edit(&mut self, id: &str, edit_prompt: &str) {
        if edit_prompt.is_empty() || self.generation_pending {
            return;
        }
        let source = match self.images.iter().find(|img| img.id == id) {
            Some(image) => image.clone(),
            None => return,
        };

        self.generation_pending = true;
        self.error = None;

        match self.gateway.edit_image(&source.base64, edit_prompt).await {
            Ok(edited_uri) => {
                if let Some(image) = self.images.iter_mut().find(|img| img.id == id) {
                    image.base64 = edited_uri;
                }
            }
            Err(e) => {
                log::error!("Edit failed for {}: {}", id, e);
                self.error = Some(EDIT_FAILED_MESSAGE.to_string());
            }
        }

        self.generation_pending = false;
    }

    /// Replaces the prompt with an elaborated suggestion. Not guarded by any
    /// pending flag; may run while other surfaces are busy.
    pub async fn enhance_prompt(&mut self) {
        if self.settings.prompt.is_empty() {
            return;
        }

        match self.gateway.suggest_prompt(&self.settings.prompt).await {
            Ok(suggestion) => {
                self.settings.prompt = suggestion;
            }
            Err(e) => {
                log::error!("Prompt suggestion failed: {}", e);
                self.error = Some(SUGGESTION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// One chat turn: appends the user message immediately, then the
    /// assistant reply, or the fixed fallback on failure. The transcript is
    /// never rolled back once the user message is in.
    pub async fn send_chat(&mut self, text: &str, image: Option<String>) {
        if (text.is_empty() && image.is_none()) || self.chat_pending {
            return;
        }

        self.chat_pending = true;
        let user_id = self.allocate_message_id();
        self.messages
            .push(ChatMessage::user(user_id, text, image.clone()));

        let reply = match self.gateway.chat(text, image.as_deref()).await {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("Assistant chat failed: {}", e);
                CHAT_FALLBACK_MESSAGE.to_string()
            }
        };

        let reply_id = self.allocate_message_id();
        self.messages.push(ChatMessage::assistant(reply_id, reply));
        self.chat_pending = false;
    }

    fn allocate_message_id(&mut self) -> String {
        self.next_message_id += 1;
        format!("msg-{}", self.next_message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, StudioError};
    use async_trait::async_trait;

    /// Scripted gateway: each operation either succeeds with a canned value
    /// or fails, so every session flow can be driven without the network.
    struct StubGateway {
        fail_generate: bool,
        fail_edit: bool,
        fail_suggest: bool,
        fail_chat: bool,
    }

    impl StubGateway {
        fn ok() -> Self {
            Self {
                fail_generate: false,
                fail_edit: false,
                fail_suggest: false,
                fail_chat: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_generate: true,
                fail_edit: true,
                fail_suggest: true,
                fail_chat: true,
            }
        }
    }

    #[async_trait]
    impl CreativeGateway for StubGateway {
        async fn generate_images(
            &self,
            request: ImageGenerationRequest,
        ) -> Result<Vec<GeneratedImage>> {
            if self.fail_generate {
                return Err(StudioError::GenerationError("boom".into()));
            }
            Ok((0..request.number_of_images)
                .map(|i| GeneratedImage {
                    id: format!("gen-1234-{}", i),
                    base64: format!("data:image/png;base64,IMG{}", i),
                })
                .collect())
        }

        async fn edit_image(&self, _source_uri: &str, _instruction: &str) -> Result<String> {
            if self.fail_edit {
                return Err(StudioError::EditError("boom".into()));
            }
            Ok("data:image/webp;base64,EDITED".to_string())
        }

        async fn suggest_prompt(&self, prompt: &str) -> Result<String> {
            if self.fail_suggest {
                return Err(StudioError::SuggestionError("boom".into()));
            }
            Ok(format!("{}, ultra detailed, golden hour lighting", prompt))
        }

        async fn chat(&self, _prompt: &str, _image_uri: Option<&str>) -> Result<String> {
            if self.fail_chat {
                return Err(StudioError::ChatError("boom".into()));
            }
            Ok("Try leaning into a cinematic style.".to_string())
        }
    }

    fn session_with(gateway: StubGateway) -> StudioSession {
        StudioSession::new(Arc::new(gateway))
    }

    #[test]
    fn new_session_shows_placeholders_and_greeting() {
        let session = session_with(StubGateway::ok());
        assert_eq!(session.images(), sample_images().as_slice());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text, GREETING_MESSAGE);
        assert!(!session.is_generating());
        assert!(session.error().is_none());
        assert_eq!(session.loading_count(), 0);
    }

    #[tokio::test]
    async fn generate_replaces_grid_with_unique_ids() {
        let mut session = session_with(StubGateway::ok());
        session.settings_mut().prompt = "a red fox".to_string();
        session.settings_mut().number_of_images = 3;

        session.generate().await;

        assert_eq!(session.images().len(), 3);
        let mut ids: Vec<_> = session.images().iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(session.error().is_none());
        assert!(!session.is_generating());
    }

    #[tokio::test]
    async fn generate_with_empty_prompt_is_a_no_op() {
        let mut session = session_with(StubGateway::ok());
        let before = session.images().to_vec();

        session.generate().await;

        assert_eq!(session.images(), before.as_slice());
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn failed_generate_restores_placeholder_set() {
        let mut session = session_with(StubGateway::failing());
        session.settings_mut().prompt = "a red fox".to_string();

        session.generate().await;

        assert_eq!(session.images(), sample_images().as_slice());
        assert_eq!(session.error(), Some(GENERATION_FAILED_MESSAGE));
        assert!(!session.is_generating());
    }

    #[tokio::test]
    async fn successful_edit_replaces_only_the_target() {
        let mut session = session_with(StubGateway::ok());
        session.settings_mut().prompt = "a red fox".to_string();
        session.settings_mut().number_of_images = 3;
        session.generate().await;
        let before = session.images().to_vec();
        let target = before[1].id.clone();

        session.edit(&target, "make it snowy").await;

        for (i, image) in session.images().iter().enumerate() {
            assert_eq!(image.id, before[i].id);
            if image.id == target {
                assert_eq!(image.base64, "data:image/webp;base64,EDITED");
            } else {
                assert_eq!(image.base64, before[i].base64);
            }
        }
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn failed_edit_leaves_the_set_unchanged() {
        let mut session = session_with(StubGateway::failing());
        let before = session.images().to_vec();
        let target = before[0].id.clone();

        session.edit(&target, "make it snowy").await;

        assert_eq!(session.images(), before.as_slice());
        assert_eq!(session.error(), Some(EDIT_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn edit_of_unknown_id_or_empty_prompt_is_a_no_op() {
        let mut session = session_with(StubGateway::ok());
        let before = session.images().to_vec();

        session.edit("gen-0-99", "make it snowy").await;
        assert_eq!(session.images(), before.as_slice());

        let target = before[0].id.clone();
        session.edit(&target, "").await;
        assert_eq!(session.images(), before.as_slice());
    }

    #[tokio::test]
    async fn enhance_prompt_overwrites_on_success() {
        let mut session = session_with(StubGateway::ok());
        session.settings_mut().prompt = "a red fox".to_string();

        session.enhance_prompt().await;

        assert_eq!(
            session.settings().prompt,
            "a red fox, ultra detailed, golden hour lighting"
        );
    }

    #[tokio::test]
    async fn enhance_prompt_failure_leaves_prompt_untouched() {
        let mut session = session_with(StubGateway::failing());
        session.settings_mut().prompt = "a red fox".to_string();

        session.enhance_prompt().await;

        assert_eq!(session.settings().prompt, "a red fox");
        assert_eq!(session.error(), Some(SUGGESTION_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn empty_chat_send_is_a_no_op() {
        let mut session = session_with(StubGateway::ok());
        let before = session.messages().len();

        session.send_chat("", None).await;

        assert_eq!(session.messages().len(), before);
    }

    #[tokio::test]
    async fn completed_chat_send_appends_exactly_two_messages() {
        let mut session = session_with(StubGateway::ok());
        let before = session.messages().len();

        session.send_chat("How do I get a moodier sky?", None).await;

        let messages = session.messages();
        assert_eq!(messages.len(), before + 2);
        let user = &messages[messages.len() - 2];
        let assistant = &messages[messages.len() - 1];
        assert_eq!(user.text, "How do I get a moodier sky?");
        assert_eq!(assistant.text, "Try leaning into a cinematic style.");
        assert_ne!(user.id, assistant.id);
        assert!(!session.is_chat_pending());
    }

    #[tokio::test]
    async fn failed_chat_send_keeps_user_message_and_appends_fallback() {
        let mut session = session_with(StubGateway::failing());
        let before = session.messages().len();

        session
            .send_chat("", Some("data:image/jpeg;base64,AAAA".to_string()))
            .await;

        let messages = session.messages();
        assert_eq!(messages.len(), before + 2);
        assert_eq!(
            messages[messages.len() - 2].image.as_deref(),
            Some("data:image/jpeg;base64,AAAA")
        );
        assert_eq!(messages[messages.len() - 1].text, CHAT_FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn generation_scenario_from_settings_panel() {
        // settings {prompt:"a red fox", style:"Anime", quality:4K, 2 images,
        // ratio 4:5} must request exactly 2 images at the mapped 3:4 ratio.
        use crate::models::{AspectRatio, Quality};

        let mut session = session_with(StubGateway::ok());
        {
            let settings = session.settings_mut();
            settings.prompt = "a red fox".to_string();
            settings.style = "Anime".to_string();
            settings.quality = Quality::FourK;
            settings.negative_prompt = String::new();
            settings.number_of_images = 2;
            settings.aspect_ratio = AspectRatio::Portrait;
        }

        assert_eq!(
            compose_prompt(session.settings()),
            "a red fox, Anime, 4K quality"
        );
        assert_eq!(
            map_aspect_ratio(session.settings().aspect_ratio),
            AspectRatio::TallPortrait
        );

        session.generate().await;
        assert_eq!(session.images().len(), 2);
    }
}
