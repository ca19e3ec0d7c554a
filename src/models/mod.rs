pub mod chat;
pub mod content;
pub mod image;
pub mod settings;

pub use chat::*;
pub use content::*;
pub use image::*;
pub use settings::*;
