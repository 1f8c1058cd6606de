use std::time::Instant;

use chrono::{Datelike, Utc};
use primex_core::{GenerationRequest, GeneratorKind, validate_request};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::formatter::ComboFormatter;
use crate::random::{self, RandomSource};

/// Lines produced by one run, in record order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub kind: GeneratorKind,
    pub lines: Vec<String>,
    pub elapsed_ms: u64,
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Runs generation requests against an owned random source.
///
/// Expiry dates are computed relative to `reference_year`, which defaults to
/// the current UTC year.
#[derive(Debug)]
pub struct GenerationSession<R = ChaCha8Rng> {
    rng: R,
    reference_year: i32,
}

impl GenerationSession<ChaCha8Rng> {
    /// Session whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(random::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(random::from_entropy())
    }
}

impl<R: RandomSource> GenerationSession<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            reference_year: Utc::now().year(),
        }
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Validate `request`, then produce exactly `clamp(count)` lines.
    ///
    /// A config error is returned before any line is generated.
    pub fn run(&mut self, request: GenerationRequest) -> Result<GenerationResult, GenerationError> {
        validate_request(&request)?;

        let kind = request.kind();
        let count = request.clamped_count();
        if i64::try_from(count).ok() != Some(request.count) {
            debug!(
                event = "count_clamped",
                requested = request.count,
                count = count
            );
        }
        info!(event = "generation_started", generator = %kind, count = count);

        let timer = Instant::now();
        let formatter = ComboFormatter::new(&request.config, self.reference_year, &mut self.rng);
        let mut lines = Vec::with_capacity(count);
        for index in 0..count {
            lines.push(formatter.format_line(index, &mut self.rng));
        }
        let elapsed_ms = u64::try_from(timer.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            event = "generation_finished",
            generator = %kind,
            lines = lines.len(),
            duration_ms = elapsed_ms
        );

        Ok(GenerationResult {
            kind,
            lines,
            elapsed_ms,
        })
    }
}
