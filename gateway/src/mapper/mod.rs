//! Conversions between request bodies, release YAML and CLI output

pub mod image;
pub mod output;
pub mod release;
