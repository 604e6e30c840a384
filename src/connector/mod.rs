//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion (OpenAI Chat Completions, plus an offline mock)
//! - Answer transport (HTTP client for the chat front-end)
//! - HTTP server exposing `/api/answer`
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;
pub mod server;

pub use adapter::*;
