//! # Application Layer
//!
//! Use cases coordinating the domain with the completion and transport connectors.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
