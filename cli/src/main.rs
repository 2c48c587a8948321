mod args;
mod logging;

use std::io::{BufRead, IsTerminal};
use std::sync::Arc;
use std::time::Duration;

use clap::CommandFactory;
use tracing::error;

use args::CommandLine;
use bannr_common::config::Config;
use bannr_core::probe::SshProbe;
use bannr_core::report::Reporter;
use bannr_core::scanner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();
    logging::init();

    let Some(specs) = gather_specs(&args) else {
        CommandLine::command().print_help()?;
        return Ok(());
    };

    let cfg = Config {
        workers: args.workers,
        timeout: Duration::from_secs(args.timeout),
        verbose: args.verbose,
    };

    let probe = Arc::new(SshProbe::new(&cfg));
    let reporter = Arc::new(Reporter::new(cfg.verbose));
    scanner::run(&specs, &cfg, probe, reporter).await;

    Ok(())
}

/// Piped stdin wins over `--target`; neither means "show help".
fn gather_specs(args: &CommandLine) -> Option<Vec<String>> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Some(read_specs(stdin.lock()));
    }
    args.target.clone().map(|target| vec![target])
}

/// Buffers the whole target list before any probing starts, one
/// specification per line. A read error truncates the list; whatever
/// arrived before it is still scanned.
fn read_specs(reader: impl BufRead) -> Vec<String> {
    let mut specs = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => {
                let spec = line.trim();
                if !spec.is_empty() {
                    specs.push(spec.to_string());
                }
            }
            Err(err) => {
                error!("failed reading targets from stdin: {err}");
                break;
            }
        }
    }
    specs
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
