//! Sample collection and rendering

use std::fmt;
use std::io::Write;

use prng_core_rs::{ChaCha8Rng, Pcg32, RawGenerator, SeedableRng, XorShift128Plus};
use serde::Serialize;

use crate::config::{GeneratorKind, SampleConfig, SampleFormat};
use crate::error::CliError;

/// A single emitted sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sample {
    Raw(u64),
    F64(f64),
    F32(f32),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Raw(v) => write!(f, "{:#018x}", v),
            Sample::F64(v) => write!(f, "{}", v),
            Sample::F32(v) => write!(f, "{}", v),
        }
    }
}

/// Everything one sampling run produced
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub generator: &'static str,
    pub seed: u64,
    pub format: SampleFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<u8>,
    pub samples: Vec<Sample>,
    pub state_bytes: usize,
    pub result_bytes: usize,
}

impl SampleReport {
    /// Draw `config.count` samples from a freshly seeded generator
    pub fn collect(config: &SampleConfig) -> Self {
        match config.generator {
            GeneratorKind::Xorshift128plus => Self::collect_from::<XorShift128Plus>(config),
            GeneratorKind::Pcg32 => Self::collect_from::<Pcg32>(config),
            GeneratorKind::Chacha8 => Self::collect_from::<ChaCha8Rng>(config),
        }
    }

    fn collect_from<G: RawGenerator + SeedableRng>(config: &SampleConfig) -> Self {
        let mut rng = G::seed_from_u64(config.seed);
        let samples = (0..config.count)
            .map(|_| draw(&mut rng, config.format, config.shift))
            .collect();

        Self {
            generator: G::NAME,
            seed: config.seed,
            format: config.format,
            shift: (config.format == SampleFormat::F32).then_some(config.shift),
            samples,
            state_bytes: G::STATE_BYTES,
            result_bytes: G::RESULT_BYTES,
        }
    }

    /// Plain text: one sample per line, then the size summary
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        for sample in &self.samples {
            writeln!(out, "{}", sample)?;
        }
        writeln!(out, "state bytes: {}", self.state_bytes)?;
        writeln!(out, "result bytes: {}", self.result_bytes)?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

fn draw<G: RawGenerator>(rng: &mut G, format: SampleFormat, shift: u8) -> Sample {
    match format {
        SampleFormat::Raw => Sample::Raw(rng.next_raw()),
        SampleFormat::F64 => Sample::F64(rng.next_f64()),
        SampleFormat::F32 => Sample::F32(rng.next_f32(shift)),
    }
}
