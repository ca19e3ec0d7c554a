use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";
pub const ONBOARDING_KEY: &str = "onboardingComplete";

/// Key-value persistence capability for presentation-layer preferences.
/// The session core never touches it; the host injects whatever medium it
/// has (browser storage, a config file, memory in tests).
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored theme, defaulting to dark when nothing was persisted yet.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    match store.get(THEME_KEY).as_deref() {
        Some("light") => Theme::Light,
        _ => Theme::Dark,
    }
}

pub fn store_theme(store: &mut dyn PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

pub fn onboarding_complete(store: &dyn PreferenceStore) -> bool {
    store.get(ONBOARDING_KEY).is_some()
}

pub fn mark_onboarding_complete(store: &mut dyn PreferenceStore) {
    store.set(ONBOARDING_KEY, "true");
}
