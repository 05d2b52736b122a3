pub mod cache;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetcher;
pub mod geos;
pub mod logging;
pub mod responses;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;
