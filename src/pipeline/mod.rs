//! Host-facing chain runner.
//!
//! A chain applies a list of [`FilterOp`]s in order, each consuming the
//! previous result. The first failing step aborts the chain and its error
//! is returned; no partial raster escapes, so the caller keeps whatever it
//! was displaying before.

pub mod op;
pub mod timing;

pub use op::FilterOp;
pub use timing::{StageTiming, TimingBreakdown};

use self::timing::elapsed_ms;

use crate::error::FilterResult;
use crate::image::Raster;
use std::time::Instant;

/// Result of a successful chain run.
#[derive(Clone, Debug)]
pub struct ChainOutput {
    pub image: Raster,
    pub timing: TimingBreakdown,
}

/// Apply `ops` to `image` in sequence.
pub fn apply_chain(image: &Raster, ops: &[FilterOp]) -> FilterResult<ChainOutput> {
    let total_start = Instant::now();
    let mut timing = TimingBreakdown::default();
    let mut current = image.clone();
    for (step, op) in ops.iter().enumerate() {
        current = timing.time(op.name(), || op.apply(&current)).map_err(|err| {
            log::warn!("apply_chain: step {step} ({}) failed: {err}", op.name());
            err
        })?;
        if let Some(stage) = timing.stages.last() {
            log::debug!(
                "apply_chain: step {step} ({}) took {:.3} ms",
                stage.label,
                stage.elapsed_ms
            );
        }
    }
    timing.total_ms = elapsed_ms(total_start);
    Ok(ChainOutput {
        image: current,
        timing,
    })
}
