pub mod dto;
pub mod loader;

pub use dto::{AiConfig, AppConfig};
pub use loader::load_config;
