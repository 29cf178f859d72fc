//! # Scopa Common
//!
//! Types shared between the sweep engine and the command line front end.
//!
//! * [`host`]: the record produced for every host the discovery tool reports.
//! * [`subnet`]: the textual CIDR pre-filter applied to user input.
//! * [`config`]: runtime settings assembled from command line arguments.

pub mod config;
pub mod host;
pub mod log;
pub mod subnet;

#[doc(hidden)]
pub use tracing as __tracing;
