//! # Game Loop
//!
//! Headless frame orchestration:
//!
//! ```text
//! Frame N:
//!   1. STREAM   controller.tick(player_x)
//!   2. RENDER   hand a generated chunk to the renderer
//!   3. PROBE    feed dt to the frame-rate self-test
//!   4. STATS    return FrameStats
//! ```

use std::time::{Duration, Instant};

use strata_procedural::{
    ProceduralResult, StreamPhase, StreamingController, StreamingState, WorldConfig, WorldSeed,
};
use tracing::warn;

use crate::diagnostics::{FrameRateProbe, StressVerdict};
use crate::render::ChunkRenderer;

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Statistics for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number, starting at 0.
    pub frame: u64,
    /// Streaming transition taken.
    pub phase: StreamPhase,
    /// Streaming plus render time in microseconds.
    pub tick_us: u64,
    /// Frame-rate verdict after this frame.
    pub verdict: StressVerdict,
}

/// Owns one streaming session and drives it frame by frame.
pub struct GameLoop<R: ChunkRenderer> {
    controller: StreamingController,
    state: StreamingState,
    renderer: R,
    probe: FrameRateProbe,
    frame_count: u64,
}

impl<R: ChunkRenderer> GameLoop<R> {
    /// Creates a loop from a world config and a renderer.
    ///
    /// # Errors
    ///
    /// Returns error if the config is out of range.
    pub fn new(config: &WorldConfig, renderer: R) -> ProceduralResult<Self> {
        let controller = StreamingController::from_config(config)?;
        let seed = config.world_seed();
        let probe = FrameRateProbe::new(&config.diagnostics);
        Ok(Self::with_controller(controller, seed, renderer, probe))
    }

    /// Creates a loop from prebuilt parts.
    #[must_use]
    pub fn with_controller(
        controller: StreamingController,
        seed: WorldSeed,
        renderer: R,
        probe: FrameRateProbe,
    ) -> Self {
        let state = controller.init(seed);
        Self {
            controller,
            state,
            renderer,
            probe,
            frame_count: 0,
        }
    }

    /// Runs one frame for the player at `player_x`, `dt` seconds after the
    /// previous one.
    pub fn tick(&mut self, player_x: f64, dt: f64) -> FrameStats {
        let start = Instant::now();

        let outcome = self.controller.tick(&mut self.state, player_x);
        let phase = outcome.phase();
        if let Some(generated) = outcome.generated {
            self.renderer.render(&generated.chunk, generated.index);
        }

        let elapsed = start.elapsed();
        if elapsed > TARGET_FRAME_TIME {
            warn!(
                frame = self.frame_count,
                ms = elapsed.as_secs_f64() * 1000.0,
                "frame exceeded budget"
            );
        }

        let stats = FrameStats {
            frame: self.frame_count,
            phase,
            tick_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            verdict: self.probe.sample(dt),
        };
        self.frame_count += 1;
        stats
    }

    /// Frames run so far.
    #[inline]
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Streaming state of the session.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &StreamingState {
        &self.state
    }

    /// The streaming controller.
    #[inline]
    #[must_use]
    pub const fn controller(&self) -> &StreamingController {
        &self.controller
    }

    /// The renderer.
    #[inline]
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The frame-rate probe.
    #[inline]
    #[must_use]
    pub const fn probe(&self) -> &FrameRateProbe {
        &self.probe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TileLayer;

    fn game_loop() -> GameLoop<TileLayer> {
        let config = WorldConfig {
            seed: Some(0.37),
            ..WorldConfig::default()
        };
        GameLoop::new(&config, TileLayer::new()).expect("valid config")
    }

    #[test]
    fn test_first_frame_renders_origin() {
        let mut game = game_loop();
        let stats = game.tick(0.0, 1.0 / 60.0);

        assert_eq!(stats.frame, 0);
        assert_eq!(stats.phase, StreamPhase::Generate);
        assert_eq!(game.renderer().chunks_rendered(), 1);
        assert_eq!(game.frame_count(), 1);
    }

    #[test]
    fn test_idle_frames_render_nothing() {
        let mut game = game_loop();
        let _ = game.tick(0.0, 1.0 / 60.0);
        for _ in 0..10 {
            assert_eq!(game.tick(4.0, 1.0 / 60.0).phase, StreamPhase::Idle);
        }
        assert_eq!(game.renderer().chunks_rendered(), 1);
    }

    #[test]
    fn test_renders_match_generated_count() {
        let mut game = game_loop();
        for step in 0..1_000 {
            let _ = game.tick(f64::from(step) * 0.5, 1.0 / 60.0);
        }
        assert_eq!(
            game.renderer().chunks_rendered(),
            game.state().stats().chunks_generated
        );
        assert_eq!(game.probe().verdict(), StressVerdict::Passed);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WorldConfig {
            seed: Some(2.0),
            ..WorldConfig::default()
        };
        assert!(GameLoop::new(&config, TileLayer::new()).is_err());
    }
}
