mod loader;
mod query_cache;

pub use loader::{CollectionSource, LoadError};
pub use query_cache::{CachePolicy, QueryCache};
