//! Checker configuration CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use checker_config::infrastructure::logging::{STDERR, STDOUT};
use checker_config::{
    ConfigLoader, FixedHost, HostConcurrency, LoggerConfig, LoggerImpl, SettingsBuilder,
    SystemHost,
};

/// Resolve and inspect trigger checker configuration
#[derive(Parser, Debug)]
#[command(name = "checker-config", version, about)]
struct Cli {
    /// Path to the YAML configuration document
    #[arg(short, long, env = "CHECKER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the default configuration document and exit
    #[arg(long)]
    default_config: bool,

    /// Print the resolved settings as YAML
    #[arg(long)]
    print_settings: bool,

    /// Use this CPU count instead of asking the host
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    cpus: Option<u16>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.default_config {
        print!("{}", ConfigLoader::default_document_yaml()?);
        return Ok(());
    }

    let document = ConfigLoader::load(cli.config.as_deref()).with_context(|| {
        cli.config.as_ref().map_or_else(
            || "Failed to load configuration".to_string(),
            |path| format!("Failed to load configuration from {}", path.display()),
        )
    })?;

    let _logger = LoggerImpl::init(&log_sink(&document.logger, cli.print_settings))?;

    let host: Box<dyn HostConcurrency> = match cli.cpus {
        Some(cpus) => Box::new(FixedHost(usize::from(cpus))),
        None => Box::new(SystemHost),
    };

    let resolved = SettingsBuilder::new(host.as_ref())
        .resolve(&document)
        .context("Invalid checker configuration")?;

    tracing::info!(
        check_interval = ?resolved.checker.check_interval,
        max_parallel_local_checks = resolved.checker.max_parallel_local_checks,
        max_parallel_remote_checks = resolved.checker.max_parallel_remote_checks,
        max_parallel_prometheus_checks = resolved.checker.max_parallel_prometheus_checks,
        "checker configuration resolved"
    );

    if cli.print_settings {
        print!("{}", serde_yaml::to_string(&resolved)?);
    }

    Ok(())
}

/// Stdout carries the printed settings, so log records move to stderr.
fn log_sink(config: &LoggerConfig, print_settings: bool) -> LoggerConfig {
    if print_settings && config.log_file == STDOUT {
        LoggerConfig {
            log_file: STDERR.to_string(),
            ..config.clone()
        }
    } else {
        config.clone()
    }
}
