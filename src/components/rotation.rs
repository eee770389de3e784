use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Per-axis rotation of an entity in radians (XYZ order).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub euler: Vec3,
}
