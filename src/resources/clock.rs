use bevy_ecs::prelude::Resource;

/// Upper bound on a single frame delta, in seconds. A stalled frame advances
/// the simulation by at most this much.
pub const DEFAULT_MAX_DELTA: f32 = 1.0 / 15.0;

/// Frame-synchronous scene time: monotonically increasing `elapsed` and the
/// clamped per-tick `delta`. Advanced exactly once per rendered frame, before
/// any animator runs.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SceneClock {
    pub elapsed: f32,
    pub delta: f32,
    pub max_delta: f32,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }
}

impl SceneClock {
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Advance by `dt` seconds, clamped into `[0, max_delta]`.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt.clamp(0.0, self.max_delta);
        self.elapsed += self.delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn advance_accumulates_elapsed() {
        let mut clock = SceneClock::default();
        clock.advance(0.016);
        clock.advance(0.016);
        assert!(approx_eq(clock.elapsed, 0.032));
        assert!(approx_eq(clock.delta, 0.016));
    }

    #[test]
    fn advance_clamps_frame_stalls() {
        let mut clock = SceneClock::default();
        clock.advance(2.0);
        assert!(approx_eq(clock.delta, clock.max_delta));
        assert!(approx_eq(clock.elapsed, clock.max_delta));
    }

    #[test]
    fn advance_ignores_negative_dt() {
        let mut clock = SceneClock::default();
        clock.advance(0.5);
        let elapsed = clock.elapsed;
        clock.advance(-1.0);
        assert!(approx_eq(clock.delta, 0.0));
        assert!(approx_eq(clock.elapsed, elapsed));
    }
}
