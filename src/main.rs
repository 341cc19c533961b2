//! Kot VPN landing page
//!
//! A windowed rendition of the Kot VPN marketing page: a three-layer
//! parallax backdrop that blurs and drifts with the pointer, a decorative
//! window-chrome panel, and a call-to-action that opens the Telegram bot.
//!
//! The implementation lives in:
//! - `kotvpn-core` - per-frame scene math (pointer, smoothing, blur policies)
//! - `kotvpn-renderer` - GPU compositing (layers, panel chrome, text)
//! - `kotvpn-config` - TOML configuration

mod app;
mod input;
mod page;

use anyhow::Context;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,kotvpn=info"),
    )
    .init();
    log::info!("Kot VPN landing starting");

    let config = kotvpn_config::Config::load().context("Failed to load configuration")?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new(config);
    event_loop.run_app(&mut app).context("Event loop failed")?;
    Ok(())
}
