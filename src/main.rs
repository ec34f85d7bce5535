use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{warn, Level};

use artifact_console::app::Args;
use artifact_console::commands::{dispatch, AppContext};
use artifact_console::config;
use artifact_console::logging::{
    init_logging, parse_rotation, set_log_file_path, LogConfig, LOG_FILENAME,
};
use artifact_console::utils::{default_data_dir, log_dir};

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = config::load_or_default(&data_dir);

    // Configure and initialize logging before anything touches a store
    let log_dir = log_dir(&data_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    set_log_file_path(log_file.to_string_lossy().to_string());

    let rotation = args
        .log_rotation
        .as_deref()
        .unwrap_or(&config.log_rotation);
    let log_config = LogConfig {
        log_dir,
        log_level: config.log_level.parse::<Level>().unwrap_or(Level::INFO),
        json_format: args.log_json || config.log_json,
        rotation: parse_rotation(rotation),
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // An explicit locale flag becomes the remembered choice.
    let locale = args.locale.unwrap_or(config.language);
    if args.locale.is_some() && locale != config.language {
        let updated = config::ConsoleConfig {
            language: locale,
            ..config.clone()
        };
        if let Err(e) = config::write_config(&data_dir, &updated) {
            warn!("could not persist locale choice: {e}");
        }
    }

    let ctx = AppContext {
        data_dir,
        locale,
        page_size: args.page_size.unwrap_or(config.page_size).max(1),
    };
    dispatch(&ctx, args.command)
}
