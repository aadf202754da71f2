//! Application configuration options

use std::path::PathBuf;

use crate::cli::qappctl::Credentials;

/// Main application options
#[derive(Debug)]
pub struct AppOptions {
    /// HTTP server configuration
    pub server: ServerOptions,

    /// External tools configuration
    pub cli: CliOptions,

    /// Account the control plane CLI logs in with
    pub credentials: Credentials,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            server: ServerOptions::default(),
            cli: CliOptions::default(),
            credentials: Credentials::new("", ""),
        }
    }
}

/// HTTP server options
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Listen address; a bare `:port` listens on all interfaces
    pub listen_addr: String,
}

impl ServerOptions {
    /// Address in a form `TcpListener::bind` accepts
    pub fn bind_addr(&self) -> String {
        if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        }
    }
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            listen_addr: ":9100".to_string(),
        }
    }
}

/// External command line tools
#[derive(Debug, Clone)]
pub struct CliOptions {
    /// Control plane CLI
    pub qappctl_bin: PathBuf,

    /// Docker CLI of the build host
    pub docker_bin: PathBuf,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            qappctl_bin: PathBuf::from("qappctl"),
            docker_bin: PathBuf::from("docker"),
        }
    }
}
