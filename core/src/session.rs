//! # Sweep Session
//!
//! Ties together the subnet, the moment the sweep started and what it found.
//! A session exists for one run of the program; only the reports derived
//! from it are written to disk.

use chrono::{DateTime, Local};
use scopa_common::host::Host;
use scopa_common::subnet::Subnet;

use crate::discovery::{DiscoveryError, HostDiscoverer};
use crate::parser;

/// Human readable timestamp used in notices and report headers.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compact timestamp used in generated file names.
pub const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Clone, Debug)]
pub struct ScanSession {
    pub subnet: Subnet,
    pub started_at: DateTime<Local>,
    pub hosts: Vec<Host>,
}

impl ScanSession {
    pub fn new(subnet: Subnet, started_at: DateTime<Local>, hosts: Vec<Host>) -> Self {
        Self {
            subnet,
            started_at,
            hosts,
        }
    }

    pub fn display_time(&self) -> String {
        self.started_at.format(DISPLAY_TIME_FORMAT).to_string()
    }

    pub fn file_time(&self) -> String {
        self.started_at.format(FILE_TIME_FORMAT).to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Runs one sweep through `discoverer` and parses its output.
///
/// Returns `Ok(None)` when the tool succeeded but printed nothing, so callers
/// can skip presenting and saving. A failed sweep is returned as an error for
/// the caller to report; it is never retried. Does not log: the front end may
/// still be drawing a spinner while this runs.
pub async fn run_sweep(
    discoverer: &dyn HostDiscoverer,
    subnet: Subnet,
    started_at: DateTime<Local>,
) -> Result<Option<ScanSession>, DiscoveryError> {
    let output = discoverer.discover(&subnet).await?;
    if output.is_empty() {
        return Ok(None);
    }

    let hosts = parser::parse_grepable(Some(&output));
    Ok(Some(ScanSession::new(subnet, started_at, hosts)))
}
