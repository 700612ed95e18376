//! SLA Dash - command-line entry point.

use std::io::Write;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use sladash_domain::{Config, Result as DomainResult};
use sladash_infra::InfraError;
use sladash_lib::commands::{linger_for_manual_copy, period_command, range_command, report_command};
use sladash_lib::utils::logging::{error_label, log_command_execution};
use sladash_lib::{AppContext, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = sladash_infra::config::load().context("failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    config.logging.json |= cli.json_logs;
    sladash_infra::observability::init(&config.logging);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let name = command_name(&cli.command);
    let started = Instant::now();
    let result = run(cli.command, config).await;
    log_command_execution(name, started.elapsed(), result.is_ok());

    result.map_err(|err| {
        tracing::error!(command = name, error_type = error_label(&err), error = %err, "command failed");
        err.into()
    })
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Range(_) => "range",
        Commands::Period(_) => "period",
        Commands::Report(_) => "report",
    }
}

async fn run(command: Commands, config: Config) -> DomainResult<()> {
    match command {
        Commands::Range(args) => {
            let ctx = AppContext::new(config)?.with_today(args.today.today);
            emit(&range_command(&ctx, &args)?)
        }
        Commands::Period(args) => {
            let ctx = AppContext::new(config)?.with_today(args.today.today);
            emit(&period_command(&ctx, &args)?)
        }
        Commands::Report(args) => {
            let ctx = AppContext::new(config)?.with_today(args.today.today);
            let outcome = report_command(&ctx, &args).await?;
            emit(&outcome.text)?;
            linger_for_manual_copy(&ctx, &outcome).await;
            Ok(())
        }
    }
}

fn emit(output: &str) -> DomainResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").and_then(|()| stdout.flush()).map_err(InfraError::from)?;
    Ok(())
}
