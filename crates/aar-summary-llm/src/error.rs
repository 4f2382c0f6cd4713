use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No API key configured (set OPENAI_API_KEY or api_key in the config file)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Response contained no choices")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, GenerateError>;
