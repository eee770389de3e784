//! Light ring animator.
//!
//! Rings cycle along the longitudinal axis: each frame the position, scale,
//! and emissive color of ring `i` are recomputed purely from `(i, elapsed)`,
//! so the effect is restartable and per-ring independent. Colors alternate
//! by parity and fade linearly past the intensity threshold.

use bevy_ecs::prelude::*;

use crate::components::material::Material;
use crate::components::position::Position;
use crate::components::ring::Ring;
use crate::components::scale::Scale;
use crate::config::{RingConfig, ShowroomConfig};
use crate::resources::clock::SceneClock;
use crate::resources::effects::EffectToggles;

/// Longitudinal position of ring `index` at `elapsed` seconds.
pub fn ring_z(index: usize, elapsed: f32, config: &RingConfig) -> f32 {
    let centered = index as f32 - config.count as f32 / 2.0;
    centered * config.spacing + (elapsed * config.speed).rem_euclid(config.spacing) * config.travel
}

/// Emissive intensity for a ring at `distance` from the origin: full up to
/// the threshold, linearly decayed to zero at `max_distance`, zero beyond.
pub fn ring_intensity(distance: f32, config: &RingConfig) -> f32 {
    if distance <= config.threshold {
        return config.intensity;
    }
    let span = config.max_distance - config.threshold;
    let faded = 1.0 - (distance.min(config.max_distance) - config.threshold) / span;
    config.intensity * faded.max(0.0)
}

/// Recompute position, scale, and emissive color for every ring.
pub fn ring_system(
    clock: Res<SceneClock>,
    toggles: Res<EffectToggles>,
    config: Res<ShowroomConfig>,
    mut query: Query<(&Ring, &mut Position, &mut Scale, &mut Material)>,
) {
    if !toggles.rings {
        return;
    }
    let rc = &config.rings;
    let elapsed = clock.elapsed;

    for (ring, mut position, mut scale, mut material) in query.iter_mut() {
        let z = ring_z(ring.index, elapsed, rc);
        let dist = z.abs();

        position.pos.x = 0.0;
        position.pos.y = 0.0;
        position.pos.z = -z;

        let shrink = (1.0 - dist * rc.falloff).max(0.0);
        *scale = Scale::uniform(rc.radius * shrink);

        let intensity = ring_intensity(dist, rc);
        let base = if ring.index % 2 == 1 {
            rc.color_odd
        } else {
            rc.color_even
        };
        material.emissive = base * intensity;
        material.emissive_intensity = intensity;
    }
}
