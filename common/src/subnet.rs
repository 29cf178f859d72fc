//! # Sweep Target
//!
//! Defines the subnet a sweep is run against.
//!
//! The check here is purely textual: a value is accepted when it has the
//! shape `ddd.ddd.ddd.ddd/dd` (one to three digits per octet, one or two
//! digits of prefix). Octets above 255 and prefixes above 32 are not
//! rejected; the discovery tool is left to refuse them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubnetError {
    #[error("no subnet supplied")]
    Empty,
    #[error("invalid subnet format: {0}")]
    Malformed(String),
}

/// A subnet that passed the CIDR shape check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subnet(String);

impl Subnet {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    /// Parses user input into a `Subnet`.
    ///
    /// Surrounding whitespace is ignored. An empty string is reported
    /// separately from a malformed one so callers can word their messages.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(SubnetError::Empty);
        }

        if !is_cidr_shaped(trimmed) {
            return Err(SubnetError::Malformed(trimmed.to_string()));
        }

        Ok(Subnet(trimmed.to_string()))
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` when `s` looks like `d{1,3}.d{1,3}.d{1,3}.d{1,3}/d{1,2}`.
pub fn is_cidr_shaped(s: &str) -> bool {
    let Some((addr, prefix)) = s.split_once('/') else {
        return false;
    };

    if !is_digit_run(prefix, 2) {
        return false;
    }

    let octets: Vec<&str> = addr.split('.').collect();
    octets.len() == 4 && octets.iter().all(|octet| is_digit_run(octet, 3))
}

/// Non-empty, at most `max_len` ASCII digits.
fn is_digit_run(s: &str, max_len: usize) -> bool {
    !s.is_empty() && s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
