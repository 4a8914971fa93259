//! CLI entry point for lumapick.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};
use tracing::{debug, info};

use lumapick::cli::{Cli, OutputFormat};
use lumapick::config::PickerConfig;
use lumapick::logging::init_logging;
use lumapick::report::Report;
use lumapick::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "lumapick", &mut io::stdout());
        return Ok(());
    }

    let config = PickerConfig::load(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    // Batch runs only log when asked to
    let _guard = (cli.interactive || cli.log_file.is_some())
        .then(|| init_logging(cli.log_file.as_deref(), &cli.log_level));

    if cli.interactive {
        info!(?config, "starting interactive session");
        return tui::run(config);
    }

    let width = config.overlay.width;
    let height = config.overlay.height;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        bail!("Overlay size must be positive, got {width} x {height}");
    }

    let picker = config
        .into_picker()
        .wrap_err("Invalid picker settings")?;
    let report = Report::new(&picker, width, height).wrap_err("Failed to compute overlay")?;

    let output = match cli.format {
        OutputFormat::Yaml => report
            .to_yaml()
            .wrap_err("Failed to serialize report to YAML")?,
        OutputFormat::Json => {
            let mut json = report
                .to_json()
                .wrap_err("Failed to serialize report to JSON")?;
            json.push('\n');
            json
        }
    };
    debug!(format = ?cli.format, bytes = output.len(), "report written");
    print!("{output}");

    Ok(())
}
