use std::path::PathBuf;

pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_TOOL: &str = "nmap";

pub struct Config {
    /// Skips the ASCII banner printed at startup.
    pub no_banner: bool,
    /// Directory that receives the text and XML reports.
    ///
    /// Created on first save if it does not exist yet.
    pub results_dir: PathBuf,
    /// Name or path of the discovery executable.
    pub tool: String,
}
