pub mod client;
pub mod dto;
mod helpers;

pub use client::GeminiClient;
pub use helpers::{FALLBACK_ANSWER, build_prompt, extract_one_word};
