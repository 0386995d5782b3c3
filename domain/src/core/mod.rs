//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DecodeError`]: a response payload that does not match the
//!   expected wire shape

pub mod error;
