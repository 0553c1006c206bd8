use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock cost of one chain step.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    /// Position of the step in the chain.
    pub step: usize,
    /// Filter name, see [`super::FilterOp::name`].
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-step timings of a chain run plus the end-to-end total.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        let step = self.stages.len();
        self.stages.push(StageTiming {
            step,
            label: label.into(),
            elapsed_ms,
        });
    }

    /// Run `f`, recording its duration under `label`.
    pub(crate) fn time<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.push(label, elapsed_ms(start));
        out
    }

    /// Step that took longest, if any ran.
    pub fn slowest(&self) -> Option<&StageTiming> {
        self.stages
            .iter()
            .max_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
