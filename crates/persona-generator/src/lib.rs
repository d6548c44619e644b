use persona_core::directory::DirectoryEntry;
use persona_types::Card;

pub mod prompt;
pub mod shape;

pub use prompt::{build_prompt, response_schema};
pub use shape::{ShapeError, card_id, enrich, parse_cards, shape_response};

/// Source of persona cards
#[async_trait::async_trait]
pub trait CardGenerator: Send + Sync {
    /// Produce one enriched card per person in `directory`, all or nothing
    async fn generate(&self, directory: &[DirectoryEntry]) -> Result<Vec<Card>, GenerationError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(
        "Failed to fetch data from the Gemini API. Please check your API key and network connection. ({0})"
    )]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch data from the Gemini API: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to fetch data from the Gemini API: the response contained no text")]
    EmptyResponse,

    #[error("API returned malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("API did not return a valid array of animal data: {0}")]
    Shape(#[from] ShapeError),

    #[error("No people to generate personas for")]
    EmptyDirectory,
}
