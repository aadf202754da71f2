//! Docker build host

use async_trait::async_trait;
use tracing::{debug, info};

use crate::cli::runner::CliRunner;
use crate::cli::BuildHost;
use crate::errors::GatewayError;

/// Local docker daemon the CLI pushes images from
pub struct DockerHost {
    runner: CliRunner,
}

impl DockerHost {
    pub fn new(runner: CliRunner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl BuildHost for DockerHost {
    async fn ensure_image(&self, reference: &str) -> Result<(), GatewayError> {
        let inspect = self
            .runner
            .run(&format!("inspect image {}", reference), ["image", "inspect", reference])
            .await;
        if inspect.is_ok() {
            debug!("Image already present on build host: {}", reference);
            return Ok(());
        }

        info!("Pulling image: {}", reference);
        self.runner
            .run(&format!("pull image {}", reference), ["pull", reference])
            .await?;

        info!("Successfully pulled image: {}", reference);
        Ok(())
    }
}
