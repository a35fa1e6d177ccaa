// Application Layer - Solver, optimizer and the use cases built on them

pub mod capacity;
pub mod optimizer;
pub mod solver;

// Re-exports
pub use capacity::{CapacityPlanner, MetricsRequest, OptimalRequest};
pub use optimizer::{OptimizerConfig, DEFAULT_MAX_SERVERS, MAX_SERVERS_LIMIT};
