//! Check command implementation
//!
//! Prints the resolved configuration and validates the generator arguments
//! without drawing any values.

use randnum_core::sampling::validate_args;
use std::io::Write;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &GeneratorConfig, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    writeln!(out, "randnum v{}", crate::VERSION)?;
    writeln!(out, "  n:         {}", config.n)?;
    writeln!(out, "  min:       {}", config.min)?;
    writeln!(out, "  max:       {}", config.max)?;
    match config.seed {
        Some(seed) => writeln!(out, "  seed:      {}", seed)?,
        None => writeln!(out, "  seed:      (random)")?,
    }
    writeln!(out, "  format:    {}", config.format)?;
    writeln!(out, "  summary:   {}", config.summary)?;
    writeln!(out, "  log level: {}", config.log_level)?;

    let (n, min, max) = validate_args(&config.n, &config.min, &config.max)?;
    writeln!(out, "OK: {} values in [{}, {}]", n, min, max)?;

    info!("Configuration valid");
    Ok(())
}
