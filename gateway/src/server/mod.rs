//! REST surface

pub mod extract;
pub mod handlers;
pub mod serve;
pub mod state;
