pub mod sweep;

use std::path::PathBuf;

use clap::Parser;
use scopa_common::config::{Config, DEFAULT_RESULTS_DIR, DEFAULT_TOOL};

#[derive(Parser, Debug)]
#[command(name = "scopa")]
#[command(version)]
#[command(about = "Interactive ping sweep helper built on nmap.")]
pub struct CommandLine {
    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Directory where text and XML reports are saved
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// Discovery executable to invoke
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TOOL)]
    pub nmap: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            results_dir: self.results_dir.clone(),
            tool: self.nmap.clone(),
        }
    }
}
