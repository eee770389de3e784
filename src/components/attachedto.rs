//! Component for rigidly attaching an entity's position to a parent entity.
//!
//! When an entity has [`AttachedTo`], the attach system copies the parent's
//! position plus a fixed offset into it each frame. A single transform write
//! on the parent therefore moves the whole sub-assembly: the door's panels
//! follow the door root, and a car's wheels and lights follow the car body
//! through its hover bounce.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

/// Makes an entity follow a parent entity's position at a fixed offset.
#[derive(Component, Clone, Copy, Debug)]
pub struct AttachedTo {
    /// The entity to follow.
    pub parent: Entity,
    /// Offset from the parent's position.
    pub offset: Vec3,
}

impl AttachedTo {
    pub fn new(parent: Entity) -> Self {
        Self {
            parent,
            offset: Vec3::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }
}
