pub mod dto;
pub mod handler;
mod helpers;
pub mod service;

pub use dto::BfhlRequest;
pub use handler::handle_bfhl;
pub use service::{AnswerProvider, BfhlService};
