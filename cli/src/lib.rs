//! Sampler CLI for the PRNG core
//!
//! Prints a deterministic run of samples from XorShift128+ or one of the
//! 32-bit baselines, together with the generator's state and result sizes,
//! as plain text or JSON.

pub mod config;
pub mod error;
pub mod report;

use std::io::Write;

pub use config::{GeneratorKind, SampleArgs, SampleConfig, SampleFormat, DEFAULT_SEED, MAX_COUNT};
pub use error::CliError;
pub use report::{Sample, SampleReport};

/// Validate `args`, draw the samples and write them to `out`
pub fn run<W: Write>(args: SampleArgs, out: &mut W) -> Result<(), CliError> {
    let config = SampleConfig::try_from(args)?;
    log::debug!(
        "sampling generator={:?} seed={} count={} format={:?} shift={}",
        config.generator,
        config.seed,
        config.count,
        config.format,
        config.shift
    );

    let report = SampleReport::collect(&config);
    log::info!("collected {} samples", report.samples.len());

    if config.json {
        report.write_json(out)
    } else {
        report.write_text(out)
    }
}
