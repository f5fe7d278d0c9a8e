//! Teamboard CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use teamboard_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use teamboard_cli::commands::{
    ExportOutcome, open_store, run_clear, run_export, run_import, run_init, run_route,
    run_summary,
};
use teamboard_cli::logging::{LogConfig, LogFormat, init_logging};
use teamboard_cli::summary::{print_route, print_summary};
use teamboard_state::Settings;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load();
    let data_dir = cli.data_dir.unwrap_or_else(|| settings.data_dir());
    let mut store = open_store(&data_dir);

    match cli.command {
        Command::Init(args) => {
            let records = run_init(&mut store, &args)?;
            println!("Initialized {} with {records} record(s)", data_dir.display());
        }
        Command::Export(args) => {
            let today = chrono::Local::now().date_naive();
            match run_export(&store, &args, &settings.general.product_name, today)? {
                ExportOutcome::Written(path) => println!("Exported to {}", path.display()),
                ExportOutcome::Printed(text) => println!("{text}"),
            }
        }
        Command::Import(args) => {
            let data = run_import(&mut store, &args)?;
            println!(
                "Imported {} record(s) from {}",
                data.record_count(),
                args.file.display()
            );
        }
        Command::Clear(args) => {
            run_clear(&mut store, &args)?;
            println!("Cleared all data in {}", data_dir.display());
        }
        Command::Summary => print_summary(run_summary(&store)?.as_ref()),
        Command::Route(args) => print_route(&run_route(&args)?),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_timestamps = cli.log_timestamps;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
