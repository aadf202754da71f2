//! Process configuration and lifecycle

pub mod options;
pub mod run;
