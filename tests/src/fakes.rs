use async_trait::async_trait;
use scopa_common::subnet::Subnet;
use scopa_core::discovery::{DiscoveryError, HostDiscoverer};

/// Stands in for `nmap`, returning canned grepable output.
pub struct CannedDiscoverer {
    output: Result<String, String>,
}

impl CannedDiscoverer {
    pub fn succeeding(output: &str) -> Self {
        Self {
            output: Ok(output.to_string()),
        }
    }

    pub fn failing(stderr: &str) -> Self {
        Self {
            output: Err(stderr.to_string()),
        }
    }
}

#[async_trait]
impl HostDiscoverer for CannedDiscoverer {
    fn name(&self) -> &str {
        "canned-nmap"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn discover(&self, _subnet: &Subnet) -> Result<String, DiscoveryError> {
        self.output.clone().map_err(|stderr| DiscoveryError::Failed {
            tool: self.name().to_string(),
            status: "exit status: 1".to_string(),
            stderr,
        })
    }
}

/// Grepable output of a `/30` sweep with one unnamed and one named host.
pub const TWO_HOST_SWEEP: &str = "\
# Nmap 7.94 scan initiated Fri Oct 16 10:00:00 2026 as: nmap -sn -oG - 10.0.0.0/30
Host: 10.0.0.1 ()\tStatus: Up
Host: 10.0.0.2 (router)\tStatus: Up
# Nmap done at Fri Oct 16 10:00:02 2026 -- 4 IP addresses (2 hosts up) scanned in 1.52 seconds
";
