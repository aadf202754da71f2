//! Deploy and instance models

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A deploy of a release into a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deploy {
    pub id: String,
    pub release: String,
    pub region: String,
    #[serde(default)]
    pub replicas: u32,
    pub ctime: Timestamp,
}

/// A running instance of a deploy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub ctime: Timestamp,
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ips: Option<String>,
}

/// Create deploy request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDeployRequest {
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub replicas: u32,
}

/// Create deploy response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDeployResponse {
    pub id: String,
}

/// Delete deploy request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteDeployRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub region: String,
}
