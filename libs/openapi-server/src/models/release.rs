//! Release models
//!
//! `CreateReleaseArgs` doubles as the YAML document handed to
//! `qappctl release create`, so its field names are the YAML keys too.

use serde::{Deserialize, Serialize};

use super::Timestamp;

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Release health check as reported by the control plane
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthCheck {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,

    /// Seconds; the control plane defaults to 3
    #[serde(default, skip_serializing_if = "is_zero")]
    pub timeout: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub key: String,
    pub value: String,
}

/// A file mounted into release instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub filename: String,
    pub mount_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Named set of config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseConfig {
    pub name: String,
    #[serde(default)]
    pub files: Vec<ConfigFile>,
}

// Request side of the types above. Same shape, but unknown fields are an
// error at every level of a create release body.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthCheckArgs {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub timeout: u32,
}

impl HealthCheckArgs {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.timeout == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvVariableArgs {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileArgs {
    pub filename: String,
    pub mount_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfigArgs {
    pub name: String,
    #[serde(default)]
    pub files: Vec<ConfigFileArgs>,
}

/// Create release request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateReleaseArgs {
    /// Generated from the current time when empty
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub flavor: String,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub port: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "HealthCheckArgs::is_empty")]
    pub health_check: HealthCheckArgs,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVariableArgs>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_file_paths: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ReleaseConfigArgs>,
}

/// Create release response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReleaseResponse {
    pub name: String,
}

/// Object storage credentials for a mounted bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KodoInfo {
    pub bucket_name: String,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kodofs {
    pub volume: String,
    pub access_token: String,
}

/// Object storage volume; exactly one driver is expected to be set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goofys: Option<KodoInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcfs: Option<KodoInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kodofs: Option<Kodofs>,

    pub region: String,
    pub mount_path: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kodo: Option<Kodo>,
}

/// A release as reported by the control plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub image: String,
    pub flavor: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub port: u32,
    pub ctime: Timestamp,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVariable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<VolumeInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_file_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ReleaseConfig>,
}
