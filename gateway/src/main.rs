//! qappctl gateway - Entry Point
//!
//! Serves the platform's registry, release and deploy operations over HTTP
//! by driving the `qappctl` command line tool.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use qappgw::app::options::{AppOptions, CliOptions, ServerOptions};
use qappgw::app::run::run;
use qappgw::cli::qappctl::Credentials;
use qappgw::logs::{init_logging, LogLevel, LogOptions};

use tracing::{error, info};

#[derive(Parser)]
#[command(name = "qappgw", version, about = "REST gateway for the qappctl control plane")]
struct Args {
    /// Access key of the platform account
    #[arg(long, env = "ACCESS_KEY", default_value = "", hide_env_values = true)]
    access_key: String,

    /// Secret key of the platform account
    #[arg(long, env = "SECRET_KEY", default_value = "", hide_env_values = true)]
    secret_key: String,

    /// HTTP listen address, i.e. 0.0.0.0:9100
    #[arg(long, default_value = ":9100")]
    listen_addr: String,

    /// Path to the qappctl binary
    #[arg(long, env = "QAPPCTL_BIN", default_value = "qappctl")]
    qappctl: PathBuf,

    /// Path to the docker binary used to fetch images before pushing
    #[arg(long, env = "DOCKER_BIN", default_value = "docker")]
    docker: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_options = LogOptions {
        log_level: args.log_level,
        json_format: args.log_json,
    };
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let options = AppOptions {
        server: ServerOptions {
            listen_addr: args.listen_addr,
        },
        cli: CliOptions {
            qappctl_bin: args.qappctl,
            docker_bin: args.docker,
        },
        credentials: Credentials::new(args.access_key, args.secret_key),
    };

    info!("Running qappctl gateway with options: {:?}", options);
    match run(options, await_shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to run the gateway: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
                _ => {
                    error!("Failed to install signal handlers, falling back to Ctrl+C");
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Ctrl+C received, shutting down...");
    }
}
