//! # Penkit
//!
//! A G-code post-processor for XY plotters with a servo-actuated pen
//! lift. Plain G-code distinguishes travel moves from draw moves only by
//! command type (`G0` vs `G1`); penkit rewrites a toolpath so the pen
//! servo is lifted before every genuine travel move and lowered after it,
//! and drops travel moves too short to be worth a lift.
//!
//! ## Architecture
//!
//! Penkit is organized as a workspace with multiple crates:
//!
//! 1. **penkit-core** - Command records, errors, servo settings
//! 2. **penkit-parser** - G-code text parsing and rendering
//! 3. **penkit-postprocessor** - The pen-lift transform
//! 4. **penkit** - Main binary integrating all crates

use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context;

pub use penkit_core::{Error, GcodeError, GcodeLine, Result, ServoSettings, SettingsError, Word};
pub use penkit_parser::parse;
pub use penkit_postprocessor::{process_lines, process_text, PenLiftProcessor};

/// Initialize logging with tracing
///
/// Logs go to stderr so the transformed G-code can go to stdout.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Read a G-code file, run the pen-lift transform, and write the result.
///
/// With `output` set the result goes to that file, otherwise to stdout.
/// Nothing is written unless the whole transform succeeds.
pub fn process_file(
    input: &Path,
    output: Option<&Path>,
    settings: &ServoSettings,
) -> anyhow::Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let transformed = process_text(&text, settings)?;

    match output {
        Some(path) => fs::write(path, &transformed)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(transformed.as_bytes())
            .context("Failed to write to stdout")?,
    }

    tracing::info!(
        input = %input.display(),
        lines = transformed.lines().count(),
        "pen-lift post-processing done"
    );
    Ok(())
}
