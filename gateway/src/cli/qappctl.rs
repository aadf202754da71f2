//! `qappctl` backed control plane

use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use openapi_server::{App, Deploy, Flavor, Image, Instance, Region, Release};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::cli::command::QappCommand;
use crate::cli::runner::CliRunner;
use crate::cli::ControlPlane;
use crate::errors::GatewayError;
use crate::mapper::output::{decode_list, decode_one};

/// Account key pair used to log the CLI in
pub struct Credentials {
    pub access_key: String,
    pub secret_key: SecretString,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.expose_secret().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Control plane client that shells out to `qappctl`
pub struct QappCtl {
    runner: CliRunner,
    credentials: Credentials,
}

impl QappCtl {
    pub fn new(runner: CliRunner, credentials: Credentials) -> Self {
        Self {
            runner,
            credentials,
        }
    }

    async fn exec(&self, command: QappCommand<'_>) -> Result<Vec<u8>, GatewayError> {
        self.runner.run(&command.action(), command.args()).await
    }

    async fn exec_list<T: DeserializeOwned>(
        &self,
        command: QappCommand<'_>,
    ) -> Result<Vec<T>, GatewayError> {
        let action = command.action();
        let out = self.runner.run(&action, command.args()).await?;
        decode_list(&action, &out)
    }
}

#[async_trait]
impl ControlPlane for QappCtl {
    async fn login(&self) -> Result<(), GatewayError> {
        info!(
            "Logging in to the control plane as {}",
            self.credentials.access_key
        );
        self.exec(QappCommand::Login {
            access_key: &self.credentials.access_key,
            secret_key: self.credentials.secret_key.expose_secret(),
        })
        .await
        .map(|_| ())
    }

    async fn push_image(&self, reference: &str) -> Result<(), GatewayError> {
        self.exec(QappCommand::Push { reference }).await.map(|_| ())
    }

    async fn list_images(&self) -> Result<Vec<Image>, GatewayError> {
        self.exec_list(QappCommand::ListImages).await
    }

    async fn list_apps(&self) -> Result<Vec<App>, GatewayError> {
        self.exec_list(QappCommand::ListApps).await
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, GatewayError> {
        self.exec_list(QappCommand::ListFlavors).await
    }

    async fn list_regions(&self) -> Result<Vec<Region>, GatewayError> {
        self.exec_list(QappCommand::ListRegions).await
    }

    async fn list_releases(&self, app: &str) -> Result<Vec<Release>, GatewayError> {
        self.exec_list(QappCommand::ListReleases { app }).await
    }

    async fn create_release(&self, app: &str, config_dir: &Path) -> Result<(), GatewayError> {
        self.exec(QappCommand::CreateRelease { app, config_dir })
            .await
            .map(|_| ())
    }

    async fn list_deploys(&self, app: &str, region: &str) -> Result<Vec<Deploy>, GatewayError> {
        self.exec_list(QappCommand::ListDeploys { app, region })
            .await
    }

    async fn create_deploy(
        &self,
        app: &str,
        release: &str,
        region: &str,
        replicas: u32,
    ) -> Result<Deploy, GatewayError> {
        let command = QappCommand::CreateDeploy {
            app,
            release,
            region,
            replicas,
        };
        let action = command.action();
        let out = self.runner.run(&action, command.args()).await?;
        decode_one(&action, &out)
    }

    async fn delete_deploy(&self, app: &str, id: &str, region: &str) -> Result<(), GatewayError> {
        self.exec(QappCommand::DeleteDeploy { app, id, region })
            .await
            .map(|_| ())
    }

    async fn list_instances(
        &self,
        app: &str,
        deploy: &str,
        region: &str,
    ) -> Result<Vec<Instance>, GatewayError> {
        self.exec_list(QappCommand::ListInstances {
            app,
            deploy,
            region,
        })
        .await
    }
}
