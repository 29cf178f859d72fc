//! XML report format.
//!
//! ```xml
//! <?xml version="1.0" ?>
//! <scopa_scan>
//!     <metadata>
//!         <datetime>2026-10-16 09:30:00</datetime>
//!         <subnet>10.0.0.0/30</subnet>
//!         <total_hosts>1</total_hosts>
//!     </metadata>
//!     <hosts>
//!         <host>
//!             <ip>10.0.0.2</ip>
//!             <hostname>router</hostname>
//!         </host>
//!     </hosts>
//! </scopa_scan>
//! ```
//!
//! The reader only understands documents produced by the writer; it is not a
//! general XML parser.

use std::fmt::Write;
use std::path::PathBuf;

use scopa_common::host::Host;

use super::{ReportError, ResultsDir, report_file_name};
use crate::session::ScanSession;

pub const EXTENSION: &str = "xml";
pub const ROOT_ELEMENT: &str = "scopa_scan";
const INDENT: &str = "    ";

/// Saves `session` as an XML document and returns the written path.
pub fn save_xml(
    session: &ScanSession,
    dir: &ResultsDir,
    base: Option<&str>,
) -> Result<PathBuf, ReportError> {
    let file_name = report_file_name(base, EXTENSION, &session.file_time());
    dir.write(&file_name, &render(session))
}

pub fn render(session: &ScanSession) -> String {
    let mut out = String::new();
    let i1 = INDENT;
    let i2 = INDENT.repeat(2);
    let i3 = INDENT.repeat(3);

    let _ = writeln!(out, "<?xml version=\"1.0\" ?>");
    let _ = writeln!(out, "<{ROOT_ELEMENT}>");

    let _ = writeln!(out, "{i1}<metadata>");
    let _ = writeln!(out, "{i2}<datetime>{}</datetime>", escape(&session.display_time()));
    let _ = writeln!(out, "{i2}<subnet>{}</subnet>", escape(session.subnet.as_str()));
    let _ = writeln!(out, "{i2}<total_hosts>{}</total_hosts>", session.hosts.len());
    let _ = writeln!(out, "{i1}</metadata>");

    if session.hosts.is_empty() {
        let _ = writeln!(out, "{i1}<hosts/>");
    } else {
        let _ = writeln!(out, "{i1}<hosts>");
        for host in &session.hosts {
            let _ = writeln!(out, "{i2}<host>");
            let _ = writeln!(out, "{i3}<ip>{}</ip>", escape(&host.ip));
            let _ = writeln!(out, "{i3}<hostname>{}</hostname>", escape(&host.hostname));
            let _ = writeln!(out, "{i2}</host>");
        }
        let _ = writeln!(out, "{i1}</hosts>");
    }

    let _ = writeln!(out, "</{ROOT_ELEMENT}>");
    out
}

/// Reads the hosts back out of a document written by [`render`], in document order.
pub fn read_xml_hosts(doc: &str) -> Result<Vec<Host>, ReportError> {
    if element_body(doc, ROOT_ELEMENT).is_none() {
        return Err(malformed(format!("missing <{ROOT_ELEMENT}> element")));
    }

    let mut hosts = Vec::new();

    if let Some(mut rest) = element_body(doc, "hosts") {
        while let Some(start) = rest.find("<host>") {
            let after_open = &rest[start + "<host>".len()..];
            let end = after_open
                .find("</host>")
                .ok_or_else(|| malformed("unterminated <host> element"))?;
            let block = &after_open[..end];

            let ip = element_body(block, "ip").ok_or_else(|| malformed("<host> without <ip>"))?;
            let hostname = element_body(block, "hostname")
                .ok_or_else(|| malformed("<host> without <hostname>"))?;

            hosts.push(Host {
                ip: unescape(ip),
                hostname: unescape(hostname),
            });
            rest = &after_open[end + "</host>".len()..];
        }
    } else if !doc.contains("<hosts/>") {
        return Err(malformed("missing <hosts> element"));
    }

    if let Some(total) = element_body(doc, "total_hosts") {
        let total: usize = total
            .trim()
            .parse()
            .map_err(|_| malformed(format!("invalid total_hosts: {total}")))?;
        if total != hosts.len() {
            return Err(malformed(format!(
                "total_hosts is {total} but {} hosts are listed",
                hosts.len()
            )));
        }
    }

    Ok(hosts)
}

fn malformed(msg: impl Into<String>) -> ReportError {
    ReportError::Malformed(msg.into())
}

/// Text between the first `<tag>` and the following `</tag>`.
fn element_body<'a>(doc: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let start = doc.find(&open)? + open.len();
    let len = doc[start..].find(&close)?;
    Some(&doc[start..start + len])
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
