//! # Host Discovery Boundary
//!
//! Scopa never touches the network itself. Liveness checks are delegated to an
//! external tool, and this module defines the seam where that happens.
//!
//! High-level code depends on [`HostDiscoverer`] only, so the production
//! [`NmapDiscoverer`] can be swapped for a fake that returns canned output.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use scopa_common::subnet::Subnet;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Flags requesting a ping sweep without port scanning, in grepable format on stdout.
pub const SWEEP_ARGS: [&str; 3] = ["-sn", "-oG", "-"];

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },
}

/// A capability that, given a subnet, returns the raw textual output of a sweep.
#[async_trait]
pub trait HostDiscoverer: Send + Sync {
    /// Name shown to the user in notices and diagnostics.
    fn name(&self) -> &str;

    /// Whether the underlying mechanism can be invoked at all.
    async fn is_available(&self) -> bool;

    /// Runs a sweep over `subnet` and returns everything it printed.
    ///
    /// Blocks until the sweep finishes; no timeout is applied.
    async fn discover(&self, subnet: &Subnet) -> Result<String, DiscoveryError>;
}

/// Runs `nmap` as a subprocess.
pub struct NmapDiscoverer {
    program: String,
}

impl NmapDiscoverer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn sweep_args(subnet: &Subnet) -> Vec<String> {
        SWEEP_ARGS
            .iter()
            .map(|arg| arg.to_string())
            .chain(std::iter::once(subnet.to_string()))
            .collect()
    }
}

#[async_trait]
impl HostDiscoverer for NmapDiscoverer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn is_available(&self) -> bool {
        let status = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => {
                debug!("{} --version exited with {status}", self.program);
                status.success()
            }
            Err(e) => {
                debug!("{} could not be started: {e}", self.program);
                false
            }
        }
    }

    async fn discover(&self, subnet: &Subnet) -> Result<String, DiscoveryError> {
        let args = Self::sweep_args(subnet);
        debug!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| DiscoveryError::Spawn {
                tool: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DiscoveryError::Failed {
                tool: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
