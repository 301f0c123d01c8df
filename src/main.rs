use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use game_shell::app::App;
use game_shell::cli::Cli;
use game_shell::config::ShellConfig;
use game_shell::renderer::LogRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ShellConfig::from_cli(&cli)?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let renderer = LogRenderer::new(config.window.width, config.window.height);
    let mut app = App::new(&config, renderer);

    log::info!("Controls: WASD move, Q/E down/up, arrows or right-drag look, Escape to quit");
    event_loop.run_app(&mut app).context("event loop terminated with an error")?;

    Ok(())
}
