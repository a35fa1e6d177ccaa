//! JSON-RPC API Layer
//!
//! Request-serving boundary for the QueueCalc core: validation hand-off,
//! wire types and error mapping. Holds no mutable state.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig, RunningServer};
