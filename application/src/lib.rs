//! Application layer for invoke-smoke
//!
//! This crate contains the smoke-run use case and the port definitions it
//! drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    invoker::{FunctionInvoker, InvocationError},
    progress::{NoProgress, RunProgressNotifier},
};
pub use use_cases::run_smoke::{CaseError, RunSmokeError, RunSmokeInput, RunSmokeUseCase};
