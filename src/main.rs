#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod ui;

use dioxus::prelude::*;
use formulation_optimizer::{domain, util};

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::app::Startup;
use crate::util::{
    config::{load_config, AppConfig},
    logging,
    version::window_title,
};

fn main() {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let startup = match load_config() {
        Ok(Some(config)) => Startup {
            config,
            load_error: None,
        },
        Ok(None) => Startup::default(),
        Err(err) => Startup {
            config: AppConfig::default(),
            load_error: Some(err.to_string()),
        },
    };

    logging::init(startup.config.verbose);
    match &startup.load_error {
        Some(err) => tracing::warn!(%err, "failed to load config, using default ratios"),
        None => tracing::info!(
            total = startup.config.initial_ratios.total(),
            "starting with initial formulation"
        ),
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(window_title())
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.with_context(startup).launch(app::App);
}
