// Domain Layer - Queueing model values and errors

pub mod error;
pub mod metrics;
pub mod params;
pub mod recommendation;
pub mod rounding;
pub mod validation;

// Re-exports
pub use error::QueueError;
pub use metrics::{CostSearchResult, RawSteadyState, ServerOption, SteadyStateMetrics};
pub use params::{CostParameters, QueueParameters, MINUTES_PER_HOUR};
pub use recommendation::Recommendation;
