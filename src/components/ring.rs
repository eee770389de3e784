use bevy_ecs::prelude::Component;

/// Index of a light ring along the cyclic scene axis.
///
/// Rings carry no other persistent state: position, scale, and emissive
/// color are recomputed every frame purely from `(index, elapsed)`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ring {
    pub index: usize,
}
