//! AWS Lambda invoker
//!
//! Calls the function under test through the Lambda `Invoke` API using the
//! standard AWS credential chain.

mod adapter;
mod types;

pub use adapter::LambdaInvoker;
