// errors.rs
use crate::cache::LoadError;
use crate::domain::ArgumentError;
use crate::fetcher::FetchError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad parameters) or downstream layers (fetch, normalize).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Upstream Error: {0}")]
    Upstream(String),
    #[error("Malformed Upstream Data: {0}")]
    MalformedData(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) => 502,
            ServerError::MalformedData(_) => 422,
            ServerError::InternalError => 500,
        }
    }
}

impl From<ArgumentError> for ServerError {
    fn from(e: ArgumentError) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

impl From<LoadError> for ServerError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Fetch(FetchError::Client(_)) => ServerError::InternalError,
            LoadError::Fetch(FetchError::Decode { .. }) | LoadError::Normalize(_) => {
                ServerError::MalformedData(e.to_string())
            }
            LoadError::Fetch(_) => ServerError::Upstream(e.to_string()),
        }
    }
}
