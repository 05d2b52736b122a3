use crate::domain::{BusinessCollection, NormalizeError};
use crate::fetcher::{FetchError, Fetcher, PageSource};
use crate::geos::Neighborhood;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl LoadError {
    pub fn is_transient(&self) -> bool {
        match self {
            LoadError::Fetch(e) => e.is_transient(),
            LoadError::Normalize(_) => false,
        }
    }
}

/// Produces a complete collection for a neighborhood.
pub trait CollectionSource: Send + Sync {
    fn load(&self, nhood: Neighborhood) -> Result<BusinessCollection, LoadError>;
}

impl<S: PageSource> CollectionSource for Fetcher<S> {
    fn load(&self, nhood: Neighborhood) -> Result<BusinessCollection, LoadError> {
        let raw = self.fetch_all(nhood)?;
        Ok(BusinessCollection::new(raw)?)
    }
}
