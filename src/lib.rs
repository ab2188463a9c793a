pub mod calculator;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod observability;
pub mod server;

pub use calculator::{Calculator, Number, Operation, OperationError};
