mod app;
mod cli;
mod components;
mod schedule;
mod state;

use app::LaunchSettings;
use clap::Parser;
use cli::Cli;
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use schedule::config::load_config_from;
use schedule::{ScheduleClient, TimeZoneParam, load_config};
use std::time::Duration;

const WINDOW_WIDTH: f64 = 520.0;
const WINDOW_HEIGHT: f64 = 360.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref().map_or_else(load_config, load_config_from) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(event = "config.load_failed", error = %e);
            Default::default()
        }
    };
    cli.apply_to(&mut config);

    let zone = TimeZoneParam::parse_or_local(&config.time_zone);
    let client = match ScheduleClient::new(
        config.api_url.clone(),
        config.token.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(event = "api.client_build_failed", error = %e);
            eprintln!("Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        event = "app.starting",
        override_id = %cli.override_id,
        endpoint = client.endpoint(),
        zone = %zone
    );

    let window_builder = WindowBuilder::new()
        .with_title("Delete Override")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_menu(None).with_window(window_builder))
        .with_context(LaunchSettings {
            override_id: cli.override_id,
            zone,
            client,
        })
        .launch(app::App);
}
