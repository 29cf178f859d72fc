//! The interactive sweep: tool check, subnet prompt, scan, table, optional save.

use chrono::Local;
use scopa_common::config::Config;
use scopa_common::subnet::{Subnet, SubnetError};
use scopa_common::success;
use scopa_core::discovery::HostDiscoverer;
use scopa_core::report::{self, ResultsDir};
use scopa_core::session::{self, DISPLAY_TIME_FORMAT, ScanSession};
use scopa_core::table::HostTable;
use tracing::{error, info, warn};

use crate::terminal::prompt::Ask;
use crate::terminal::{print, spinner};

/// How an interactive run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The run reached the end, whether or not hosts were found or the sweep failed.
    Completed,
    /// The run stopped early because a prerequisite or the user input was unusable.
    Aborted,
}

pub async fn sweep(
    cfg: &Config,
    discoverer: &dyn HostDiscoverer,
    prompt: &mut dyn Ask,
) -> anyhow::Result<Outcome> {
    if !discoverer.is_available().await {
        print::install_guidance(discoverer.name());
        return Ok(Outcome::Aborted);
    }

    let Some(subnet) = read_subnet(prompt).await? else {
        return Ok(Outcome::Aborted);
    };

    let started_at = Local::now();
    print::header("sweeping");
    info!("Starting sweep of {subnet}");
    info!("Time: {}", started_at.format(DISPLAY_TIME_FORMAT));
    info!("This may take a few seconds or minutes...");

    let spinner = spinner::start(format!("Sweeping {subnet} with {}...", discoverer.name()));
    let result = session::run_sweep(discoverer, subnet, started_at).await;
    spinner.finish_and_clear();

    match result {
        Ok(Some(session)) => {
            info!(
                "{} reported {} hosts on {}",
                discoverer.name(),
                session.hosts.len(),
                session.subnet
            );
            print::header("discovered hosts");
            print::host_table(&HostTable::new(&session.hosts));
            offer_save(cfg, &session, prompt).await?;
        }
        Ok(None) => warn!("{} produced no output", discoverer.name()),
        Err(e) => error!("Error running {}: {e}", discoverer.name()),
    }

    print::closing();
    Ok(Outcome::Completed)
}

async fn read_subnet(prompt: &mut dyn Ask) -> anyhow::Result<Option<Subnet>> {
    info!("Subnet examples: 192.168.1.0/24, 10.0.0.0/24");
    let input = prompt.ask("Enter the subnet:").await?;

    match input.parse::<Subnet>() {
        Ok(subnet) => Ok(Some(subnet)),
        Err(SubnetError::Empty) => {
            error!("No subnet supplied. Exiting.");
            Ok(None)
        }
        Err(SubnetError::Malformed(value)) => {
            error!("Invalid subnet format: {value}");
            info!("Use the format: 192.168.1.0/24");
            Ok(None)
        }
    }
}

async fn offer_save(
    cfg: &Config,
    session: &ScanSession,
    prompt: &mut dyn Ask,
) -> anyhow::Result<()> {
    crate::sprint!();
    if !prompt.confirm("Save the results as TXT and XML files?").await? {
        return Ok(());
    }

    let base = prompt
        .ask("Base file name (press Enter for the default):")
        .await?;
    let base = Some(base.as_str()).filter(|b| !b.is_empty());

    let dir = ResultsDir::ensure(&cfg.results_dir)?;

    let text_path = report::save_text(session, &dir, base)?;
    success!("Results saved to {}", text_path.display());

    let xml_path = report::save_xml(session, &dir, base)?;
    success!("Results saved to {}", xml_path.display());

    Ok(())
}
