mod fetch_error;
#[allow(clippy::module_inception)]
mod fetcher;
mod models;
mod open_data;

pub use fetch_error::FetchError;
pub use fetcher::{Fetcher, PageSource, DEFAULT_PAGE_SIZE};
pub use models::{RawBusinessRecord, RawPoint};
pub use open_data::OpenDataClient;
