//! # Host Model
//!
//! A host is exactly what the discovery tool reported: an address and, when
//! reverse resolution succeeded, a name. Nothing is inferred or enriched.

/// Hostname stored when the discovery tool reports none.
pub const NO_HOSTNAME: &str = "(No hostname)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    pub ip: String,
    pub hostname: String,
}

impl Host {
    /// Builds a host, falling back to [`NO_HOSTNAME`] when `hostname` is absent or blank.
    pub fn new(ip: impl Into<String>, hostname: Option<&str>) -> Self {
        let hostname = match hostname {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => NO_HOSTNAME.to_string(),
        };

        Self {
            ip: ip.into(),
            hostname,
        }
    }
}
