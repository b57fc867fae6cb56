use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvaiError {
    #[error("{0} not found. Set it via .env file, environment variable, or --api-key flag.")]
    MissingApiKey(String),

    #[error("API Error: {status} {status_text}")]
    Api { status: u16, status_text: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvaiError>;

#[cfg(test)]
mod tests {
    use crate::error::ConvaiError;

    #[test]
    fn api_error_message_carries_status_and_text() {
        let err = ConvaiError::Api {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(format!("{err}"), "API Error: 404 Not Found");
    }

    #[test]
    fn missing_key_message_names_the_variable() {
        let err = ConvaiError::MissingApiKey("ELEVENLABS_API_KEY".to_string());
        assert_eq!(
            format!("{err}"),
            "ELEVENLABS_API_KEY not found. Set it via .env file, environment variable, or --api-key flag."
        );
    }
}
