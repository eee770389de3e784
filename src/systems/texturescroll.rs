//! Tiling texture scroll.
//!
//! Advances each scrolling surface's UV offset by `speed * dt` and wraps it
//! into `[0, 1)`. Wrapping commutes with addition, so integrating many small
//! deltas matches one large delta up to float tolerance. The grid overlay is
//! gated by the `grid` effect toggle; its phase is preserved while hidden.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::texturescroll::{GridOverlay, TextureScroll};
use crate::resources::clock::SceneClock;
use crate::resources::effects::EffectToggles;

/// Wrap both offset components into `[0, 1)`.
pub fn wrap_unit(offset: Vec2) -> Vec2 {
    Vec2::new(offset.x.rem_euclid(1.0), offset.y.rem_euclid(1.0))
}

/// Advance the UV offset of every scrolling surface.
pub fn texture_scroll_system(
    clock: Res<SceneClock>,
    toggles: Res<EffectToggles>,
    mut query: Query<(&mut TextureScroll, Option<&GridOverlay>)>,
) {
    let dt = clock.delta;
    for (mut scroll, grid) in query.iter_mut() {
        if grid.is_some() && !toggles.grid {
            continue;
        }
        let speed = scroll.speed;
        scroll.offset = wrap_unit(scroll.offset + speed * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn wrap_unit_handles_negative_offsets() {
        let w = wrap_unit(Vec2::new(-0.3, -1.25));
        assert!(approx_eq(w.x, 0.7));
        assert!(approx_eq(w.y, 0.75));
    }

    #[test]
    fn wrap_unit_is_identity_inside_range() {
        let w = wrap_unit(Vec2::new(0.25, 0.9));
        assert!(approx_eq(w.x, 0.25));
        assert!(approx_eq(w.y, 0.9));
    }

    #[test]
    fn accumulation_matches_single_step() {
        // Many small steps and one large step land on the same wrapped offset.
        let speed = Vec2::new(0.0, -0.3);
        let mut stepped = Vec2::ZERO;
        for _ in 0..100 {
            stepped = wrap_unit(stepped + speed * 0.01);
        }
        let single = wrap_unit(speed * 1.0);
        assert!(approx_eq(stepped.y, single.y));
    }
}
