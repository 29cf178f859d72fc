//! # Scopa Core
//!
//! Everything between "a subnet was typed in" and "reports are on disk":
//!
//! * [`discovery`]: the [`discovery::HostDiscoverer`] boundary and its `nmap` implementation.
//! * [`parser`]: turns grepable tool output into [`scopa_common::host::Host`] records.
//! * [`session`]: one sweep's subnet, start time and hosts.
//! * [`table`]: terminal table layout for discovered hosts.
//! * [`report`]: text and XML persistence under the results directory.

pub mod discovery;
pub mod parser;
pub mod report;
pub mod session;
pub mod table;
