use anyhow::Result;
use chrono::NaiveTime;
use clap::Parser;
use clockface::config::{AppConfig, StateStore};
use clockface::render::{export_png, PangoMetrics};
use clockface::ui::ClockView;
use clockface::{ClockWidget, TimeSample};
use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow};
use log::{error, info, warn};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::rc::Rc;

const APP_ID: &str = "org.clockface.Clockface";

/// clockface - An analog clock face for the desktop
#[derive(Parser, Debug, Clone)]
#[command(name = "clockface")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial window width in pixels (overrides the config file)
    #[arg(long = "width", value_name = "PX")]
    width: Option<i32>,

    /// Initial window height in pixels (overrides the config file)
    #[arg(long = "height", value_name = "PX")]
    height: Option<i32>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render a single frame to a PNG file and exit
    #[arg(long = "png", value_name = "FILE")]
    png: Option<PathBuf>,

    /// Time to show when rendering with --png (e.g., --at 10:08:30)
    #[arg(long = "at", value_name = "HH:MM:SS", value_parser = parse_time)]
    at: Option<TimeSample>,

    /// Ignore the state saved by the previous session
    #[arg(long = "no-restore")]
    no_restore: bool,
}

/// Parse "HH:MM:SS" into a time sample
fn parse_time(s: &str) -> Result<TimeSample, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
        .map(|t| TimeSample::from_time(&t))
        .map_err(|e| format!("Expected format HH:MM:SS (e.g., 10:08:30), got {}: {}", s, e))
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting clockface v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = cli.png.clone() {
        let config = load_config(&cli);
        let mut widget = ClockWidget::with_measurer(config.style, Box::new(PangoMetrics));
        widget.set_size(
            cli.width.unwrap_or(config.window.width),
            cli.height.unwrap_or(config.window.height),
        );
        return export_png(&widget, cli.at, &path);
    }

    if CLI_OPTIONS.set(cli).is_err() {
        warn!("CLI options already set");
    }

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);

    // Arguments were already parsed by clap
    app.run_with_args(&["clockface"]);
    Ok(())
}

fn load_config(cli: &Cli) -> AppConfig {
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    })
}

/// Window size saved alongside the clock colors
fn window_size_from_state(state: &Value) -> Option<(i32, i32)> {
    let window = state.get("window")?;
    let width = i32::try_from(window.get("width")?.as_i64()?).ok()?;
    let height = i32::try_from(window.get("height")?.as_i64()?).ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

fn build_ui(app: &Application) {
    let Some(cli) = CLI_OPTIONS.get() else {
        error!("CLI options not initialized");
        return;
    };
    let config = load_config(cli);

    let view = Rc::new(ClockView::new(config.style, config.window.density));

    let mut width = cli.width.unwrap_or(config.window.width);
    let mut height = cli.height.unwrap_or(config.window.height);

    let state_store = match StateStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("Instance state unavailable: {}", e);
            None
        }
    };

    if let Some(store) = &state_store {
        if cli.no_restore {
            if let Err(e) = store.discard() {
                warn!("Failed to discard saved state: {}", e);
            }
        } else if let Some(saved) = store.take() {
            info!("Restoring {} saved colors", saved.color_count());
            let super_state = view.restore(Some(saved));
            match super_state.as_ref().and_then(window_size_from_state) {
                Some((w, h)) if cli.width.is_none() && cli.height.is_none() => {
                    width = w;
                    height = h;
                }
                Some(_) => {}
                None if super_state.is_some() => {
                    warn!("Ignoring saved window state with unexpected shape");
                }
                None => {}
            }
        }
    }

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Clockface")
        .default_width(width)
        .default_height(height)
        .child(view.widget())
        .build();

    let view_for_close = view.clone();
    window.connect_close_request(move |window| {
        if let Some(store) = &state_store {
            let super_state = json!({
                "window": {
                    "width": window.width(),
                    "height": window.height(),
                }
            });
            let saved = view_for_close.save(Some(super_state));
            match store.save(&saved) {
                Ok(()) => info!("Saved instance state to {}", store.path().display()),
                Err(e) => warn!("Failed to save instance state: {}", e),
            }
        }
        glib::Propagation::Proceed
    });

    window.present();
}
