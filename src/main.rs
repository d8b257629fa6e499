//! Media Month Sorter - moves media files into year/month folders
//!
//! A CLI tool that sorts the files of one directory by EXIF capture date,
//! falling back to the file system modification time.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use media_month_sorter::i18n::Strings;
use media_month_sorter::{Cli, Config, Organizer, init_locale, output};
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    // Initialize locale based on system settings
    let language = init_locale();

    let cli = Cli::parse();

    if cli.print_sample_config {
        print!("{}", Config::sample_config());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let guard = setup_logging(&cli, &config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        ?language,
        "Media Month Sorter starting"
    );

    let organizer = match Organizer::new(&config) {
        Ok(organizer) => organizer,
        Err(e) => {
            info!(error = %e, "No source directory configured");
            output::print_error(Strings::missing_source());
            eprintln!("{}", Cli::command().render_help());
            drop(guard);
            std::process::exit(1);
        }
    };

    if config.verbose {
        info!(?config, "Configuration loaded");
    }
    info!(
        source = %organizer.source_dir().display(),
        destination = %organizer.destination_dir().display(),
        dry_run = config.dry_run,
        "Sorting files"
    );

    organizer.run();
    drop(guard);

    Ok(())
}

/// Load configuration from file or CLI arguments
fn load_config(cli: &Cli) -> Result<Config> {
    let config = if let Some(ref config_path) = cli.config {
        let file_config = Config::load_from_file(config_path)?;
        cli.merge_with_config(file_config)
    } else {
        cli.to_config()
    };

    Ok(config)
}

/// Setup logging: stderr for warnings (everything in verbose mode), plus an
/// optional log file
fn setup_logging(cli: &Cli, config: &Config) -> Result<Option<WorkerGuard>> {
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let console_level = if config.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (writer, guard) = match cli.log_file {
        Some(ref log_path) => {
            if let Some(parent) = log_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let (json_writer, plain_writer) = if cli.json_log {
        (writer, None)
    } else {
        (None, writer)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_writer.map(|w| fmt::layer().json().with_ansi(false).with_writer(w)))
        .with(plain_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_level),
        )
        .init();

    Ok(guard)
}
