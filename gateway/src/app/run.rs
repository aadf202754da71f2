//! Main application run loop

use std::future::Future;
use std::sync::Arc;

use tracing::{error, info};

use crate::app::options::{AppOptions, CliOptions};
use crate::cli::docker::DockerHost;
use crate::cli::qappctl::{Credentials, QappCtl};
use crate::cli::runner::CliRunner;
use crate::cli::ControlPlane;
use crate::errors::GatewayError;
use crate::server::serve::serve;
use crate::server::state::ServerState;

/// Run the gateway until `shutdown_signal` resolves
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), GatewayError> {
    info!("Initializing qappctl gateway...");

    let state = init(&options.cli, options.credentials).await?;
    let handle = serve(&options.server, state, shutdown_signal).await?;

    match handle.await {
        Ok(result) => {
            info!("HTTP server stopped");
            result
        }
        Err(e) => {
            error!("HTTP server task failed: {}", e);
            Err(GatewayError::ServerError(e.to_string()))
        }
    }
}

// =============================== INITIALIZATION ================================== //

async fn init(cli: &CliOptions, credentials: Credentials) -> Result<Arc<ServerState>, GatewayError> {
    if !credentials.is_complete() {
        return Err(GatewayError::ConfigError(
            "access key and secret key are required (--access-key/--secret-key or ACCESS_KEY/SECRET_KEY)"
                .to_string(),
        ));
    }

    let qappctl = QappCtl::new(CliRunner::new(&cli.qappctl_bin), credentials);
    qappctl.login().await.map_err(|e| {
        GatewayError::LoginError(format!(
            "login failed, please check your access-key/secret-key pair: {}",
            e
        ))
    })?;
    info!("Logged in to the control plane");

    let docker = DockerHost::new(CliRunner::new(&cli.docker_bin));

    Ok(Arc::new(ServerState::new(
        Arc::new(qappctl),
        Arc::new(docker),
    )))
}
