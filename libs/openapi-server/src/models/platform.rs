//! Registry and catalog models

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// An image stored in the platform registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub tag: String,
    pub ctime: Timestamp,
}

impl Image {
    /// Registry reference in `name:tag` form
    pub fn reference(&self) -> String {
        format!("{}:{}", self.name, self.tag)
    }
}

/// An application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

/// A machine flavor releases can run on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    pub name: String,
    pub cpu: u32,
    pub memory: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
}

/// A deployment region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Push image request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PushImageRequest {
    #[serde(default)]
    pub image: String,
}
