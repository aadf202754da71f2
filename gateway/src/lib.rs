//! qappctl gateway library
//!
//! REST facade over the `qappctl` control plane CLI.

pub mod app;
pub mod cli;
pub mod errors;
pub mod logs;
pub mod mapper;
pub mod server;
pub mod utils;
