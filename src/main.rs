use djsongmatch::MainWindow;
use djsongmatch::cli::Args;
use djsongmatch::config;
use djsongmatch::dialogs::FilterSet;
use djsongmatch::dialogs::prefs::AppSettings;

use clap::Parser;
use eframe::egui;
use log::{debug, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());

    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    let log_level = args.log_level();

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .clone()
            .unwrap_or_else(|| config::data_file(config::LOG_FILE, &path_config));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), log_level);
    } else {
        // Console logging, RUST_LOG takes precedence
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level.to_string().to_lowercase()),
        )
        .filter_module("egui", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();
    }

    info!("DJ Song Match starting...");
    debug!("Command-line args: {:?}", args);

    // Bad --filter is a usage error, not something to paper over
    let filters = args.filter.as_deref().map(FilterSet::parse).transpose()?;

    let settings_path = config::config_file(config::SETTINGS_FILE, &path_config);
    info!("Config path: {}", settings_path.display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("DJ Song Match v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([480.0, 320.0])
            .with_resizable(true)
            .with_drag_and_drop(true),
        persist_window: true,
        persistence_path: Some(settings_path),
        ..Default::default()
    };

    let start_dir = args.start_dir.clone();

    eframe::run_native(
        "DJ Song Match",
        native_options,
        Box::new(move |cc| {
            // Load persisted settings if available, otherwise defaults
            let settings = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| match AppSettings::from_json(&json) {
                    Ok(settings) => Some(settings),
                    Err(e) => {
                        warn!("Ignoring unreadable settings: {:#}", e);
                        None
                    }
                })
                .unwrap_or_else(|| {
                    info!("No persisted settings found, using defaults");
                    AppSettings::default()
                });
            debug!("Settings: {:?}", settings);

            let app = MainWindow::native(filters)
                .with_settings(settings)
                .with_start_dir(start_dir);

            Ok(Box::new(app))
        }),
    )?;

    info!("Application exiting");
    Ok(())
}
