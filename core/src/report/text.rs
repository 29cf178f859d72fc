use std::fmt::Write;
use std::path::PathBuf;

use super::{ReportError, ResultsDir, report_file_name};
use crate::session::ScanSession;

pub const EXTENSION: &str = "txt";
const RULE_WIDTH: usize = 70;

/// Saves `session` as a plain text report and returns the written path.
pub fn save_text(
    session: &ScanSession,
    dir: &ResultsDir,
    base: Option<&str>,
) -> Result<PathBuf, ReportError> {
    let file_name = report_file_name(base, EXTENSION, &session.file_time());
    dir.write(&file_name, &render(session))
}

pub fn render(session: &ScanSession) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "SCOPA - Network Scan");
    let _ = writeln!(out, "Date/Time: {}", session.display_time());
    let _ = writeln!(out, "Subnet: {}", session.subnet);
    let _ = writeln!(out, "Total hosts: {}", session.hosts.len());
    let _ = writeln!(out, "{}\n", "=".repeat(RULE_WIDTH));

    for host in &session.hosts {
        let _ = writeln!(out, "IP: {:<20} | Hostname: {}", host.ip, host.hostname);
    }

    out
}
