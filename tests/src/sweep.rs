//! End-to-end sweeps against canned discovery output: parse, tabulate, persist.

use chrono::{DateTime, Local, TimeZone};
use scopa_common::host::NO_HOSTNAME;
use scopa_common::subnet::Subnet;
use scopa_core::discovery::DiscoveryError;
use scopa_core::report::{self, ResultsDir};
use scopa_core::session;
use scopa_core::table::HostTable;

use crate::fakes::{CannedDiscoverer, TWO_HOST_SWEEP};

fn started_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 16, 10, 0, 0).unwrap()
}

/// Subnet `10.0.0.0/30`, two hosts reported, saved under the base name `test`.
#[tokio::test]
async fn sweep_display_and_save() {
    let discoverer = CannedDiscoverer::succeeding(TWO_HOST_SWEEP);
    let subnet: Subnet = "10.0.0.0/30".parse().unwrap();

    let session = session::run_sweep(&discoverer, subnet, started_at())
        .await
        .expect("canned sweep should succeed")
        .expect("canned sweep printed output");

    let table = HostTable::new(&session.hosts);
    assert_eq!(table.row_count(), 2, "table should list both hosts");

    let tmp = tempfile::tempdir().unwrap();
    let dir = ResultsDir::ensure(tmp.path().join("results")).unwrap();

    let text_path = report::save_text(&session, &dir, Some("test")).unwrap();
    let xml_path = report::save_xml(&session, &dir, Some("test")).unwrap();

    assert_eq!(text_path, tmp.path().join("results").join("test.txt"));
    assert_eq!(xml_path, tmp.path().join("results").join("test.xml"));

    let text = std::fs::read_to_string(&text_path).unwrap();
    assert!(text.contains("Total hosts: 2"));
    assert_eq!(session.hosts[0].hostname, NO_HOSTNAME);
    assert!(text.contains("10.0.0.1"));
    assert!(text.contains(&format!("Hostname: {NO_HOSTNAME}")));
    assert!(text.contains("Hostname: router"));

    let xml = std::fs::read_to_string(&xml_path).unwrap();
    let restored = report::read_xml_hosts(&xml).unwrap();
    assert_eq!(restored, session.hosts);
    assert_eq!(restored[0].ip, "10.0.0.1");
    assert_eq!(restored[1].hostname, "router");
}

#[tokio::test]
async fn default_names_share_the_sweep_timestamp() {
    let discoverer = CannedDiscoverer::succeeding(TWO_HOST_SWEEP);
    let subnet: Subnet = "10.0.0.0/30".parse().unwrap();
    let session = session::run_sweep(&discoverer, subnet, started_at())
        .await
        .unwrap()
        .unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let dir = ResultsDir::ensure(tmp.path()).unwrap();

    let text_path = report::save_text(&session, &dir, None).unwrap();
    let xml_path = report::save_xml(&session, &dir, None).unwrap();

    assert_eq!(text_path.file_name().unwrap(), "scopa_scan_20261016_100000.txt");
    assert_eq!(xml_path.file_name().unwrap(), "scopa_scan_20261016_100000.xml");
}

#[tokio::test]
async fn empty_output_gives_no_session() {
    let discoverer = CannedDiscoverer::succeeding("");
    let subnet: Subnet = "192.168.50.0/24".parse().unwrap();

    let result = session::run_sweep(&discoverer, subnet, started_at())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn sweep_without_live_hosts_gives_empty_table() {
    let discoverer = CannedDiscoverer::succeeding(
        "# Nmap done at Fri Oct 16 10:00:02 2026 -- 256 IP addresses (0 hosts up)\n",
    );
    let subnet: Subnet = "192.168.50.0/24".parse().unwrap();

    let session = session::run_sweep(&discoverer, subnet, started_at())
        .await
        .unwrap()
        .unwrap();

    assert!(session.is_empty());
    assert_eq!(HostTable::new(&session.hosts), HostTable::Empty);
}

#[tokio::test]
async fn failing_discoverer_produces_no_session() {
    let discoverer = CannedDiscoverer::failing("Failed to resolve \"10.0.0.0/30\".");
    let subnet: Subnet = "10.0.0.0/30".parse().unwrap();

    let result = session::run_sweep(&discoverer, subnet, started_at()).await;

    match result {
        Err(DiscoveryError::Failed { stderr, .. }) => {
            assert!(stderr.contains("Failed to resolve"))
        }
        other => panic!("expected a failed sweep, got {other:?}"),
    }
}

#[tokio::test]
async fn text_report_survives_xml_failure() {
    let discoverer = CannedDiscoverer::succeeding(TWO_HOST_SWEEP);
    let subnet: Subnet = "10.0.0.0/30".parse().unwrap();
    let session = session::run_sweep(&discoverer, subnet, started_at())
        .await
        .unwrap()
        .unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let dir = ResultsDir::ensure(tmp.path()).unwrap();
    // A directory where the XML file should go makes the second write fail.
    std::fs::create_dir(tmp.path().join("test.xml")).unwrap();

    let text_path = report::save_text(&session, &dir, Some("test")).unwrap();
    assert!(report::save_xml(&session, &dir, Some("test")).is_err());
    assert!(text_path.exists());
}
