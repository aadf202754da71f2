//! qappctl command table

use std::ffi::OsString;
use std::path::Path;

/// One `qappctl` invocation
#[derive(Clone, Copy)]
pub enum QappCommand<'a> {
    Login {
        access_key: &'a str,
        secret_key: &'a str,
    },
    Push {
        reference: &'a str,
    },
    ListImages,
    ListApps,
    ListFlavors,
    ListRegions,
    ListReleases {
        app: &'a str,
    },
    CreateRelease {
        app: &'a str,
        config_dir: &'a Path,
    },
    ListDeploys {
        app: &'a str,
        region: &'a str,
    },
    CreateDeploy {
        app: &'a str,
        release: &'a str,
        region: &'a str,
        replicas: u32,
    },
    DeleteDeploy {
        app: &'a str,
        id: &'a str,
        region: &'a str,
    },
    ListInstances {
        app: &'a str,
        deploy: &'a str,
        region: &'a str,
    },
}

impl QappCommand<'_> {
    /// Human readable description used in logs and error messages
    pub fn action(&self) -> String {
        match self {
            QappCommand::Login { .. } => "login".to_string(),
            QappCommand::Push { reference } => format!("push image {}", reference),
            QappCommand::ListImages => "list images".to_string(),
            QappCommand::ListApps => "list apps".to_string(),
            QappCommand::ListFlavors => "list flavors".to_string(),
            QappCommand::ListRegions => "list regions".to_string(),
            QappCommand::ListReleases { app } => format!("list releases of {}", app),
            QappCommand::CreateRelease { app, .. } => format!("create release of {}", app),
            QappCommand::ListDeploys { app, region } => {
                format!("list deploys of {} in {}", app, region)
            }
            QappCommand::CreateDeploy { app, release, .. } => {
                format!("create deploy of {} release {}", app, release)
            }
            QappCommand::DeleteDeploy { app, id, .. } => {
                format!("delete deploy {} of {}", id, app)
            }
            QappCommand::ListInstances { app, deploy, .. } => {
                format!("list instances of {} deploy {}", app, deploy)
            }
        }
    }

    /// Command line arguments, program name excluded
    pub fn args(&self) -> Vec<OsString> {
        match *self {
            QappCommand::Login {
                access_key,
                secret_key,
            } => os_args(&["login", "--ak", access_key, "--sk", secret_key]),
            QappCommand::Push { reference } => os_args(&["push", reference]),
            QappCommand::ListImages => os_args(&["images", "-o", "json"]),
            QappCommand::ListApps => os_args(&["apps", "-o", "json"]),
            QappCommand::ListFlavors => os_args(&["flavors", "-o", "json"]),
            QappCommand::ListRegions => os_args(&["regions", "-o", "json"]),
            QappCommand::ListReleases { app } => os_args(&["release", "list", app, "-o", "json"]),
            QappCommand::CreateRelease { app, config_dir } => {
                let mut args = os_args(&["release", "create", app, "-c"]);
                args.push(config_dir.as_os_str().to_os_string());
                args
            }
            QappCommand::ListDeploys { app, region } => {
                os_args(&["deploy", "list", "--region", region, app, "-o", "json"])
            }
            QappCommand::CreateDeploy {
                app,
                release,
                region,
                replicas,
            } => os_args(&[
                "deploy",
                "create",
                app,
                "--region",
                region,
                "--release",
                release,
                "--expect_replicas",
                &replicas.to_string(),
                "-o",
                "json",
            ]),
            QappCommand::DeleteDeploy { app, id, region } => {
                os_args(&["deploy", "delete", app, "--id", id, "--region", region])
            }
            QappCommand::ListInstances {
                app,
                deploy,
                region,
            } => os_args(&[
                "instance", "list", app, "--deploy", deploy, "--region", region, "-o", "json",
            ]),
        }
    }
}

fn os_args(parts: &[&str]) -> Vec<OsString> {
    parts.iter().map(OsString::from).collect()
}
