use anyhow::Result;
use clap::Parser;
use rev_snake::game::GameConfig;
use rev_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "rev_snake")]
#[command(version, about = "Terminal snake with direction-reversing food")]
struct Cli {
    /// Side length of the square board
    #[arg(long, default_value = "10")]
    size: i32,

    /// Milliseconds between game ticks
    #[arg(long = "tick-ms", default_value = "550")]
    tick_ms: u64,

    /// Probability that a food item reverses the body (0.0 to 1.0)
    #[arg(long, default_value = "0.3")]
    reversal_probability: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        board_size: cli.size,
        tick_interval_ms: cli.tick_ms,
        reversal_probability: cli.reversal_probability.clamp(0.0, 1.0),
    };

    let mut mode = HumanMode::new(config)?;
    mode.run().await?;

    Ok(())
}
