//! AWS Adventure - a menu-driven text adventure about learning the cloud.

use academy_engine::{GameConfig, GameEngine, Outcome, RngSource, Terminal};
use academy_rules::ContentGraph;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GameConfig::from_env().context("invalid configuration")?;
    let content = ContentGraph::academy().context("failed to load game content")?;
    info!(
        locations = content.location_count(),
        questions = content.exam().len(),
        seeded = config.seed.is_some(),
        "content loaded"
    );

    let rng = RngSource::from_seed_option(config.seed);
    let console = Terminal::new(&config);

    let mut engine = GameEngine::begin(content, console, rng, config)?;
    let outcome = engine.run()?;

    // Game over and certification both end the process normally.
    match outcome {
        Outcome::GameOver { reason } => info!(%reason, "game over"),
        Outcome::Certified => info!("player certified"),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
