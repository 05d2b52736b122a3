pub mod businesses;
pub mod summary;

pub use businesses::{BusinessListVm, NeighborhoodVm};
pub use summary::SummaryVm;
