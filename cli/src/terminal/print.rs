use colored::*;
use scopa_common::log::PRINT_TARGET;
use scopa_core::table::{HostTable, NO_HOSTS_NOTICE, TABLE_WIDTH};
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = TABLE_WIDTH;

#[macro_export]
macro_rules! sprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool) {
    if no_banner {
        return;
    }

    let text_content: String = format!("⟦ SCOPA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
    banner::print();
    fat_separator();
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn thin_separator() {
    let sep: ColoredString = "─".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn host_table(table: &HostTable) {
    let HostTable::Filled {
        header,
        rows,
        summary,
    } = table
    else {
        no_results();
        return;
    };

    fat_separator();
    print(&format!("{}", header.color(colors::PRIMARY).bold()));
    thin_separator();
    for row in rows {
        print(&paint_row(row));
    }
    fat_separator();
    scopa_common::success!("{}", summary);
}

/// Colors the address and hostname cells of a table row.
fn paint_row(row: &str) -> String {
    let Some((ip, hostname)) = row.split_once(" | ") else {
        return row.to_string();
    };

    let hostname_color = if hostname.trim_end() == scopa_common::host::NO_HOSTNAME {
        colors::MISSING
    } else {
        colors::HOSTNAME
    };

    format!(
        "{} {} {}",
        ip.color(colors::IPV4_ADDR),
        "|".color(colors::SEPARATOR),
        hostname.color(hostname_color)
    )
}

pub fn no_results() {
    print(&format!("{}", NO_HOSTS_NOTICE.red().bold()));
}

pub fn closing() {
    sprint!();
    print(&format!("{}", "Sweep finished. Goodbye! 🧹".green().bold()));
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

pub fn interrupted() {
    sprint!();
    print(&format!("{}", "Sweep interrupted by user. Exiting...".red().bold()));
}

pub fn install_guidance(tool: &str) {
    print(&format!("{}", format!("{tool} is not installed!").red().bold()));
    for (platform, command) in [
        ("Debian/Ubuntu", "sudo apt install nmap"),
        ("RedHat/CentOS", "sudo yum install nmap"),
        ("macOS", "brew install nmap"),
    ] {
        print(&format!(
            "  {} {}",
            format!("{platform:<14}").color(colors::ACCENT),
            command.color(colors::TEXT_DEFAULT)
        ));
    }
}
