//! Parsing of `nmap -oG` (grepable) output.
//!
//! A ping sweep prints one line per live host:
//!
//! ```text
//! # Nmap 7.94 scan initiated ... as: nmap -sn -oG - 10.0.0.0/30
//! Host: 10.0.0.1 ()	Status: Up
//! Host: 10.0.0.2 (router)	Status: Up
//! # Nmap done at ... -- 4 IP addresses (2 hosts up) scanned in 1.52 seconds
//! ```
//!
//! Only lines starting with `Host:` are considered; everything else is ignored.

use scopa_common::host::Host;

pub const HOST_MARKER: &str = "Host:";

/// Extracts hosts from grepable output, in the order they were reported.
///
/// Never fails: lines that do not carry at least an address are skipped.
pub fn parse_grepable(output: Option<&str>) -> Vec<Host> {
    let Some(output) = output else {
        return Vec::new();
    };

    output.lines().filter_map(parse_host_line).collect()
}

fn parse_host_line(line: &str) -> Option<Host> {
    if !line.starts_with(HOST_MARKER) {
        return None;
    }

    let mut tokens = line.split_whitespace().skip(1);
    let ip = tokens.next()?;
    let hostname = tokens
        .next()
        .map(|token| token.trim_matches(|c: char| c == '(' || c == ')'));

    Some(Host::new(ip, hostname))
}
