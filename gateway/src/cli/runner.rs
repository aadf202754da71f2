//! External command execution

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Output, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::errors::GatewayError;

/// Runs one external program, one process per call
#[derive(Debug, Clone)]
pub struct CliRunner {
    program: PathBuf,
    leading_args: Vec<OsString>,
}

impl CliRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Argument passed before every command, e.g. a script for an interpreter
    pub fn leading_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_args.push(arg.into());
        self
    }

    /// Run the program to completion and return its combined output,
    /// stdout followed by stderr.
    ///
    /// `action` describes the call in error messages. Arguments are never
    /// logged since they may carry credentials. There is no timeout and the
    /// child is not killed if the caller goes away.
    pub async fn run<I, S>(&self, action: &str, args: I) -> Result<Vec<u8>, GatewayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        debug!("{}: {}", self.program.display(), action);

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| GatewayError::CommandFailed {
                action: action.to_string(),
                reason: e.to_string(),
                output: String::new(),
            })?;

        if !output.status.success() {
            return Err(GatewayError::CommandFailed {
                action: action.to_string(),
                reason: output.status.to_string(),
                output: String::from_utf8_lossy(&combined_output(output))
                    .trim_end()
                    .to_string(),
            });
        }

        Ok(combined_output(output))
    }
}

fn combined_output(output: Output) -> Vec<u8> {
    let mut bytes = output.stdout;
    bytes.extend_from_slice(&output.stderr);
    bytes
}
