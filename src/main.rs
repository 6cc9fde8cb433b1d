use anyhow::{ensure, Result};
use clap::Parser;
use gruvy_snake::app::App;
use gruvy_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "gruvy-snake")]
#[command(version, about = "Grid-based arcade snake for the terminal")]
struct Cli {
    /// Cells along each side of the square playfield
    #[arg(long, default_value = "25")]
    grid_size: usize,

    /// Milliseconds between gameplay ticks
    #[arg(long, default_value = "200")]
    tick_ms: u64,

    /// Run without sound
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ensure!(cli.grid_size >= 8, "grid must be at least 8 cells per side");
    ensure!(cli.tick_ms > 0, "tick interval must be positive");

    let config = GameConfig {
        grid_size: cli.grid_size,
        tick_interval_ms: cli.tick_ms,
        ..GameConfig::default()
    };

    let mut app = App::new(config, cli.mute);
    app.run().await
}
