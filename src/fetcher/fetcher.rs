// fetcher.rs
use crate::fetcher::{FetchError, RawBusinessRecord};
use crate::geos::Neighborhood;

pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Anything that can hand back one page of raw rows.
pub trait PageSource: Send + Sync {
    fn fetch_page(
        &self,
        nhood: Neighborhood,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<RawBusinessRecord>, FetchError>;
}

/// Walks a [`PageSource`] in fixed-size pages until it runs dry.
pub struct Fetcher<S> {
    source: S,
    page_size: usize,
}

impl<S: PageSource> Fetcher<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
        }
    }

    /// Every row for `nhood`, in the order the pages returned them.
    /// Any failed page fails the whole fetch.
    pub fn fetch_all(&self, nhood: Neighborhood) -> Result<Vec<RawBusinessRecord>, FetchError> {
        let mut records = Vec::new();
        let mut offset = 0;
        let mut pages = 0;

        loop {
            tracing::debug!(%nhood, offset, limit = self.page_size, "requesting page");

            let page = self
                .source
                .fetch_page(nhood, offset, self.page_size)
                .map_err(|e| {
                    tracing::warn!(%nhood, offset, error = %e, "page fetch failed");
                    e
                })?;

            let rows = page.len();
            pages += 1;
            records.extend(page);

            if rows < self.page_size {
                break;
            }
            offset += self.page_size;
        }

        tracing::info!(%nhood, pages, records = records.len(), "finished paging");
        Ok(records)
    }
}
