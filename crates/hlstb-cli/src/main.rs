use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use tracing_subscriber::EnvFilter;

mod args;
pub mod exit_codes;

use args::Cli;
use hlstb_core::{write_banner, DesignFn, FunctionUnderTest, Harness, HarnessConfig};
use hlstb_design::hls_main;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    // stdout carries only the verdict line; diagnostics go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse_lenient();
    let stdout = std::io::stdout();
    let dut = DesignFn::new("hls_main", hls_main);
    let code = match run(&cli, dut, &mut stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::INTERNAL_ERROR
        }
    };
    std::process::exit(code);
}

fn run<D, W>(cli: &Cli, dut: D, out: &mut W) -> Result<i32>
where
    D: FunctionUnderTest,
    W: Write,
{
    tracing::debug!(ignored = cli.ignored.len(), "process arguments are not interpreted");

    let harness = Harness::new(HarnessConfig::default(), dut);
    let report = harness.run().context("verification harness failed")?;

    write_banner(&report, out).context("failed to write verdict")?;

    Ok(exit_codes::from_outcome(report.outcome()))
}
