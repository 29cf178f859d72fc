mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use commands::sweep::{self, Outcome};
use scopa_core::discovery::NmapDiscoverer;
use terminal::{logging, print, prompt::Prompter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = commands.to_config();
    print::banner(cfg.no_banner);

    let discoverer = NmapDiscoverer::new(cfg.tool.clone());
    let mut prompter = Prompter::new();

    tokio::select! {
        outcome = sweep::sweep(&cfg, &discoverer, &mut prompter) => match outcome? {
            Outcome::Completed => Ok(ExitCode::SUCCESS),
            Outcome::Aborted => Ok(ExitCode::FAILURE),
        },
        _ = tokio::signal::ctrl_c() => {
            print::interrupted();
            // A pending stdin read would keep the runtime from shutting down.
            std::process::exit(0);
        }
    }
}
