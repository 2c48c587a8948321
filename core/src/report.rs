//! Result output.
//!
//! One line per probed host on stdout, completion order. Diagnostics go to
//! stderr through `tracing`, so scan output stays pipeable.

use std::net::IpAddr;

/// Formats and emits scan results.
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Formats the line for `addr`, or `None` when a banner-less host
    /// should stay silent.
    ///
    /// Line breaks inside the banner are rewritten to `\n\t\t\t` so a
    /// multi-line banner renders as an indented block under its address.
    pub fn render(&self, addr: IpAddr, banner: &str) -> Option<String> {
        if banner.is_empty() && !self.verbose {
            return None;
        }
        let indented = banner.replace("\r\n", "\n").replace('\n', "\n\t\t\t");
        Some(format!("{addr}\t\t{indented}"))
    }

    /// Emits the line for `addr`, if any.
    ///
    /// Exactly one `println!` per result; the call takes the stdout lock,
    /// so lines from concurrent workers cannot interleave.
    pub fn emit(&self, addr: IpAddr, banner: &str) {
        if let Some(line) = self.render(addr, banner) {
            println!("{line}");
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
