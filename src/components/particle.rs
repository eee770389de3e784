//! Drifting dust particle state.
//!
//! Particles are a fixed pool of entities created at scene construction and
//! recycled in place: when one rises past the ceiling the particle system
//! re-seats it at ground level with a freshly sampled velocity instead of
//! despawning it. `age` feeds the sinusoidal lateral drift and resets on
//! recycle.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Velocity and age of one pooled particle.
#[derive(Component, Clone, Copy, Debug)]
pub struct Particle {
    /// World-units-per-second velocity, sampled at spawn and on recycle.
    pub velocity: Vec3,
    /// Seconds since spawn or last recycle.
    pub age: f32,
}

impl Particle {
    pub fn new(velocity: Vec3) -> Self {
        Self { velocity, age: 0.0 }
    }
}
