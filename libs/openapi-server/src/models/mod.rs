//! Gateway API models

mod deploy;
mod platform;
mod release;
mod service;

pub use deploy::{
    CreateDeployRequest, CreateDeployResponse, DeleteDeployRequest, Deploy, Instance,
};
pub use platform::{App, Flavor, Image, PushImageRequest, Region};
pub use release::{
    ConfigFile, ConfigFileArgs, CreateReleaseArgs, CreateReleaseResponse, EnvVariable,
    EnvVariableArgs, HealthCheck, HealthCheckArgs, Kodo, KodoInfo, Kodofs, Release,
    ReleaseConfig, ReleaseConfigArgs, VolumeInfo,
};
pub use service::{HealthResponse, VersionResponse};

/// Timestamp as emitted by the control plane (RFC 3339, offset preserved)
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
