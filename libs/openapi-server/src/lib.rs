//! REST API models for the qappctl gateway
//!
//! Shared by the gateway handlers and anything that talks to the gateway.

pub mod models;

pub use models::*;
