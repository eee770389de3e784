//! Named scene-node registry.
//!
//! Built once at scene construction and never mutated afterwards: every
//! animatable node is registered under a semantic role string
//! (`"car1"`, `"car1/wheel_front_left"`, `"door"`, `"floor"`, ...) so that
//! animation code and the host address nodes by role, never by child-array
//! ordering inside a loaded asset.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

/// Role string to entity map for the scene's named nodes.
#[derive(Resource, Debug, Default)]
pub struct NodeRegistry {
    nodes: FxHashMap<String, Entity>,
}

impl NodeRegistry {
    pub fn register(&mut self, role: impl Into<String>, entity: Entity) {
        self.nodes.insert(role.into(), entity);
    }

    pub fn get(&self, role: &str) -> Option<Entity> {
        self.nodes.get(role).copied()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.nodes.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
