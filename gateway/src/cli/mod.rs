//! Control plane access through external command line tools

pub mod command;
pub mod docker;
pub mod qappctl;
pub mod runner;

use std::path::Path;

use async_trait::async_trait;
use openapi_server::{App, Deploy, Flavor, Image, Instance, Region, Release};

use crate::errors::GatewayError;

/// The platform control plane, one method per `qappctl` action
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Establish the CLI session with the configured credentials
    async fn login(&self) -> Result<(), GatewayError>;

    async fn push_image(&self, reference: &str) -> Result<(), GatewayError>;

    async fn list_images(&self) -> Result<Vec<Image>, GatewayError>;

    async fn list_apps(&self) -> Result<Vec<App>, GatewayError>;

    async fn list_flavors(&self) -> Result<Vec<Flavor>, GatewayError>;

    async fn list_regions(&self) -> Result<Vec<Region>, GatewayError>;

    async fn list_releases(&self, app: &str) -> Result<Vec<Release>, GatewayError>;

    /// Create a release from the `dora.yaml` found in `config_dir`
    async fn create_release(&self, app: &str, config_dir: &Path) -> Result<(), GatewayError>;

    async fn list_deploys(&self, app: &str, region: &str) -> Result<Vec<Deploy>, GatewayError>;

    async fn create_deploy(
        &self,
        app: &str,
        release: &str,
        region: &str,
        replicas: u32,
    ) -> Result<Deploy, GatewayError>;

    async fn delete_deploy(&self, app: &str, id: &str, region: &str) -> Result<(), GatewayError>;

    async fn list_instances(
        &self,
        app: &str,
        deploy: &str,
        region: &str,
    ) -> Result<Vec<Instance>, GatewayError>;
}

/// The host images are pushed from
#[async_trait]
pub trait BuildHost: Send + Sync {
    /// Make sure `reference` is available locally, fetching it if needed
    async fn ensure_image(&self, reference: &str) -> Result<(), GatewayError>;
}
