//! # Frame-Rate Self-Test
//!
//! Watches frame times and reports whether the world keeps up.
//!
//! The probe keeps a cheap running average, `fps = (fps + 1 / dt) / 2`,
//! which weighs the latest frame as heavily as all history. After the
//! warm-up window a sustained pass is logged once as the scene self-test.

use strata_procedural::DiagnosticsConfig;
use tracing::{info, warn};

/// Outcome of the latest sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StressVerdict {
    /// No valid sample seen yet.
    Pending,
    /// Averaged frame rate at or above the minimum.
    Passed,
    /// Averaged frame rate below the minimum.
    Failed,
}

/// Running frame-rate average with pass/fail reporting.
#[derive(Clone, Debug)]
pub struct FrameRateProbe {
    min_fps: f64,
    warmup_seconds: f64,
    fps: f64,
    elapsed: f64,
    samples: u64,
    verdict: StressVerdict,
    self_test_reported: bool,
}

impl FrameRateProbe {
    /// Creates a probe with the configured thresholds.
    #[must_use]
    pub fn new(config: &DiagnosticsConfig) -> Self {
        Self {
            min_fps: config.min_fps,
            warmup_seconds: config.warmup_seconds,
            fps: 0.0,
            elapsed: 0.0,
            samples: 0,
            verdict: StressVerdict::Pending,
            self_test_reported: false,
        }
    }

    /// Feeds one frame duration in seconds and returns the verdict.
    ///
    /// Non-positive and non-finite durations are ignored.
    pub fn sample(&mut self, dt: f64) -> StressVerdict {
        if !(dt.is_finite() && dt > 0.0) {
            return self.verdict;
        }

        self.fps = (self.fps + dt.recip()) / 2.0;
        self.elapsed += dt;
        self.samples += 1;

        let verdict = if self.fps >= self.min_fps {
            StressVerdict::Passed
        } else {
            StressVerdict::Failed
        };

        if verdict != self.verdict {
            match verdict {
                StressVerdict::Passed => info!(fps = self.fps, "stress test passed"),
                StressVerdict::Failed => {
                    warn!(fps = self.fps, min_fps = self.min_fps, "stress test failed");
                }
                StressVerdict::Pending => {}
            }
        }
        self.verdict = verdict;

        if !self.self_test_reported
            && self.elapsed >= self.warmup_seconds
            && verdict == StressVerdict::Passed
        {
            self.self_test_reported = true;
            info!(
                fps = self.fps,
                elapsed = self.elapsed,
                "scene self-test succeeded"
            );
        }

        verdict
    }

    /// Current averaged frame rate.
    #[inline]
    #[must_use]
    pub const fn fps(&self) -> f64 {
        self.fps
    }

    /// Seconds of valid frames seen.
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Valid samples taken.
    #[inline]
    #[must_use]
    pub const fn samples(&self) -> u64 {
        self.samples
    }

    /// Latest verdict.
    #[inline]
    #[must_use]
    pub const fn verdict(&self) -> StressVerdict {
        self.verdict
    }

    /// Whether the post-warm-up success has been reported.
    #[inline]
    #[must_use]
    pub const fn self_test_passed(&self) -> bool {
        self.self_test_reported
    }
}
