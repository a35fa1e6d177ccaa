// QueueCalc Core - M/M/c math & use cases
// NO infrastructure dependencies: pure, synchronous, re-entrant

pub mod application;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
