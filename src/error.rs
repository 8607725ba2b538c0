// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A page region every valid page carries is missing.
    #[error("expected page region not found: {0}")]
    MissingContainer(&'static str),

    /// A runner row lacks one of its identity fields.
    #[error("runner row is missing required field: {0}")]
    MissingField(&'static str),

    #[error("runner row has {found} price cells, at least {needed} required")]
    InsufficientPrices { found: usize, needed: usize },

    #[error("unparsable price {0:?}")]
    BadPrice(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
