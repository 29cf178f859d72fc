//! Terminal layout of discovered hosts.
//!
//! The layout is kept free of color and I/O so the front end decides how to
//! paint it and tests can inspect it directly.

use scopa_common::host::Host;

pub const IP_WIDTH: usize = 20;
pub const HOSTNAME_WIDTH: usize = 45;
pub const TABLE_WIDTH: usize = 70;

pub const NO_HOSTS_NOTICE: &str = "No active hosts found on the subnet.";

#[derive(Debug, PartialEq, Eq)]
pub enum HostTable {
    Empty,
    Filled {
        header: String,
        rows: Vec<String>,
        summary: String,
    },
}

impl HostTable {
    pub fn new(hosts: &[Host]) -> Self {
        if hosts.is_empty() {
            return HostTable::Empty;
        }

        HostTable::Filled {
            header: row("IP ADDRESS", "HOSTNAME"),
            rows: hosts.iter().map(|host| row(&host.ip, &host.hostname)).collect(),
            summary: format!("Total active hosts found: {}", hosts.len()),
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            HostTable::Empty => 0,
            HostTable::Filled { rows, .. } => rows.len(),
        }
    }
}

fn row(ip: &str, hostname: &str) -> String {
    format!("{ip:<IP_WIDTH$} | {hostname:<HOSTNAME_WIDTH$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hosts_gives_empty_table() {
        assert_eq!(HostTable::new(&[]), HostTable::Empty);
        assert_eq!(HostTable::Empty.row_count(), 0);
    }

    #[test]
    fn rows_are_padded_to_column_widths() {
        let hosts = vec![Host::new("10.0.0.1", None), Host::new("10.0.0.2", Some("router"))];

        let HostTable::Filled { header, rows, summary } = HostTable::new(&hosts) else {
            panic!("expected a filled table");
        };

        assert!(header.starts_with("IP ADDRESS"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), IP_WIDTH + 3 + HOSTNAME_WIDTH);
        assert!(rows[1].starts_with(&format!("{}{} | router", "10.0.0.2", " ".repeat(12))));
        assert!(rows[0].contains("(No hostname)"));
        assert_eq!(summary, "Total active hosts found: 2");
    }

    #[test]
    fn long_values_are_not_truncated() {
        let long_name = "a".repeat(60);
        let table = HostTable::new(&[Host::new("10.0.0.1", Some(&long_name))]);

        let HostTable::Filled { rows, .. } = table else {
            panic!("expected a filled table");
        };
        assert!(rows[0].ends_with(&long_name));
    }
}
