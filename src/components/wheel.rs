use bevy_ecs::prelude::Component;

/// Continuous spin for a wheel node.
///
/// Wheel entities are registered in the node registry under semantic roles
/// (`"car1/wheel_front_left"` and so on) so animation code never depends on
/// child ordering inside a loaded asset.
#[derive(Component, Clone, Copy, Debug)]
pub struct Wheel {
    /// Spin rate in radians per second of elapsed time.
    pub spin_rate: f32,
}
