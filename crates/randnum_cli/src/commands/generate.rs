//! Generate command implementation
//!
//! Draws uniform random numbers with the resolved configuration and renders
//! them to the given writer.

use randnum_core::{RandomNumberGenerator, SeededRng};
use std::io::Write;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::output;
use crate::Result;

/// Run the generate command
pub fn run<W: Write>(config: &GeneratorConfig, out: &mut W) -> Result<()> {
    info!("Starting generation...");
    info!("  n: {}", config.n);
    info!("  min: {}", config.min);
    info!("  max: {}", config.max);
    info!("  Output format: {}", config.format);

    let rng = match config.seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_entropy(),
    };
    info!(seed = rng.seed(), "Random source initialised");

    let mut generator = RandomNumberGenerator::new(rng);
    let samples = generator.generate_args(&config.n, &config.min, &config.max)?;

    output::render(&samples, config.format, config.summary, out)?;

    info!(count = samples.len(), "Generation complete");
    Ok(())
}
