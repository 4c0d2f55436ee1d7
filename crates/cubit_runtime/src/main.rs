//! Cubit Runtime
//!
//! Minimal binary that loads settings, configures the ambient random
//! source and rolls the configured dice.
//!
//! Usage: `cubit [settings.json]`

use anyhow::{Context, Result};
use cubit_core::{with_random, RandomProvider, SequenceRandom};
use cubit_services::Settings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Cubit v{}", cubit_core::VERSION);

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("loading settings from {path}"))?,
        None => {
            tracing::info!("no settings file given, using defaults");
            Settings::default()
        }
    };

    tracing::info!("Initializing services...");
    cubit_services::init_services(&settings).context("initializing services")?;

    for term in &settings.dice {
        let total = term.roll_ambient();
        tracing::info!(%term, total, min = term.min_total(), max = term.max_total(), "rolled");
    }

    let coin = with_random(|rng| rng.next_bool());
    tracing::info!(heads = coin, "flipped a coin");

    // Reproducible side channel, independent of the ambient source.
    let mut replay = SequenceRandom::from_text("cubit-runtime");
    let mut block = [0u8; 16];
    replay.generator_mut().fill_aligned(&mut block);
    tracing::info!(block = ?block, "replay block");

    Ok(())
}
