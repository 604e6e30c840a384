//! # Domain Layer
//!
//! Messages, history shaping, personas and response envelopes.
//! This layer performs no I/O.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
