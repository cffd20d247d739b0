//! Pilotbridge - Userpilot SDK plugin bridge demo
//!
//! Entry point that handles CLI argument parsing and mode switching
//! between the headless REPL and the GUI window.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use pilotbridge::bridge::BridgeAdapter;
use pilotbridge::config::BridgeConfig;
use pilotbridge::fixtures::APP_TOKEN_PLACEHOLDER;
use pilotbridge::log_view::LogView;
use pilotbridge::plugin::{SimulatedPlugin, UserpilotPlugin};
use pilotbridge::ui::cli::run_cli;
use pilotbridge::ui::gui::BridgeApp;

/// Pilotbridge: Userpilot SDK plugin bridge demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// App token passed to setup
    #[arg(long, env = "USERPILOT_APP_TOKEN", default_value = APP_TOKEN_PLACEHOLDER)]
    token: String,

    /// Run in headless mode (REPL only, no GUI)
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Start without a plugin, as if it were not installed
    #[arg(long, default_value_t = false)]
    no_plugin: bool,

    /// Simulated SDK completion latency in milliseconds
    #[arg(long, default_value_t = 250)]
    latency_ms: u64,

    /// Probability (0-1) that a simulated SDK call fails
    #[arg(long, default_value_t = 0.0)]
    failure_rate: f64,

    /// Seed for screen/event selection and failure injection
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn to_config(&self) -> BridgeConfig {
        BridgeConfig {
            app_token: self.token.clone(),
            plugin_enabled: !self.no_plugin,
            latency: Duration::from_millis(self.latency_ms),
            failure_rate: self.failure_rate,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 1. Parse command line arguments
    let args = Args::parse();

    // 2. Initialize logger with verbosity level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        },
    ))
    .init();

    let config = args.to_config();
    config.validate()?;

    log::info!("Pilotbridge initialized");
    log::debug!("Config: {:?}", config);

    // 3. Wire the plugin capability (or leave it out)
    let simulator = if config.plugin_enabled {
        let plugin = SimulatedPlugin::start(config.simulated())
            .context("Failed to start simulated plugin")?;
        Some(Arc::new(plugin))
    } else {
        log::warn!("Running without a plugin");
        None
    };
    let plugin = simulator
        .clone()
        .map(|sim| sim as Arc<dyn UserpilotPlugin>);

    let adapter = BridgeAdapter::new(
        plugin,
        LogView::new("output"),
        LogView::new("callbacks"),
        &config,
    );

    // 4. Branch based on execution mode
    if args.headless {
        println!("[*] Pilotbridge v{} - Headless Mode", env!("CARGO_PKG_VERSION"));
        run_cli(adapter, simulator)?;
    } else {
        println!("[*] Pilotbridge v{} - GUI Mode", env!("CARGO_PKG_VERSION"));

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 720.0])
                .with_min_inner_size([720.0, 480.0])
                .with_title("Pilotbridge - Userpilot Plugin Demo"),
            ..Default::default()
        };

        eframe::run_native(
            "Pilotbridge",
            native_options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
                Box::new(BridgeApp::new(adapter))
            }),
        )
        .map_err(|e| anyhow::anyhow!("GUI Error: {}", e))?;
    }

    Ok(())
}
