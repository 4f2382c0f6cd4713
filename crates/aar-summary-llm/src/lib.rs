pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{ChatClient, ChatClientBuilder, TextGenerator};
pub use error::{GenerateError, Result};
pub use prompt::summary_prompt;
