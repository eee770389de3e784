//! Particle pool integration and recycling.
//!
//! Each particle rises by its sampled velocity with a small sinusoidal
//! lateral drift and a slow tumble. Crossing the ceiling recycles it in
//! place: new ground-level position, freshly sampled velocity, age reset.
//! The pool is never resized after construction.
//!
//! Hiding the `particles` effect skips the whole pass; positions, velocities,
//! and ages are preserved so showing it again resumes mid-flight.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::particle::Particle;
use crate::components::position::Position;
use crate::components::rotation::Rotation;
use crate::config::{ParticleConfig, ShowroomConfig};
use crate::resources::clock::SceneClock;
use crate::resources::effects::EffectToggles;
use crate::resources::rng::SceneRng;

/// Sample a fresh particle velocity from the configured distribution.
pub fn sample_velocity(rng: &mut SceneRng, config: &ParticleConfig) -> Vec3 {
    Vec3::new(
        rng.f32_range(-config.lateral, config.lateral),
        rng.f32_range(config.rise_min, config.rise_max),
        rng.f32_range(-config.lateral, config.lateral),
    )
}

/// Sample a ground-level recycle position within the spawn footprint.
pub fn sample_ground_position(rng: &mut SceneRng, config: &ParticleConfig) -> Vec3 {
    let half = config.footprint * 0.5;
    Vec3::new(
        rng.f32_range(-half, half),
        config.reset_y,
        rng.f32_range(-half, half),
    )
}

/// Integrate every particle and recycle those that crossed the ceiling.
///
/// Invariant: after this system runs, every particle's height lies in
/// `[0, ceiling]`.
pub fn particle_system(
    clock: Res<SceneClock>,
    toggles: Res<EffectToggles>,
    config: Res<ShowroomConfig>,
    mut rng: ResMut<SceneRng>,
    mut query: Query<(&mut Particle, &mut Position, &mut Rotation)>,
) {
    if !toggles.particles {
        return;
    }
    let dt = clock.delta;
    if dt <= 0.0 {
        return;
    }
    let pc = &config.particles;

    for (mut particle, mut position, mut rotation) in query.iter_mut() {
        particle.age += dt;

        let next_y = position.pos.y + particle.velocity.y * dt;
        if next_y > pc.ceiling {
            position.pos = sample_ground_position(&mut rng, pc);
            particle.velocity = sample_velocity(&mut rng, pc);
            particle.age = 0.0;
        } else {
            // Lateral drift keeps the rise from being perfectly straight.
            let drift = particle.age.sin() * pc.drift_amp;
            position.pos.x += particle.velocity.x * dt + drift;
            position.pos.y = next_y;
            position.pos.z += particle.velocity.z * dt;
        }

        // Slow tumble, purely cosmetic.
        rotation.euler.x += dt * 0.5;
        rotation.euler.y += dt * 0.3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_velocity_respects_ranges() {
        let config = ParticleConfig::default();
        let mut rng = SceneRng::new(Some(11));
        for _ in 0..200 {
            let v = sample_velocity(&mut rng, &config);
            assert!((-config.lateral..=config.lateral).contains(&v.x));
            assert!((config.rise_min..=config.rise_max).contains(&v.y));
            assert!((-config.lateral..=config.lateral).contains(&v.z));
        }
    }

    #[test]
    fn ground_position_is_inside_footprint() {
        let config = ParticleConfig::default();
        let half = config.footprint * 0.5;
        let mut rng = SceneRng::new(Some(12));
        for _ in 0..200 {
            let p = sample_ground_position(&mut rng, &config);
            assert!((-half..=half).contains(&p.x));
            assert!((-half..=half).contains(&p.z));
            assert_eq!(p.y, config.reset_y);
        }
    }
}
