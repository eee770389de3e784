use bevy_ecs::prelude::*;

/// Notification that a display object's hover flag changed.
///
/// Triggered by the pointer router on enter/exit (including the implicit
/// exits of a surface-leave reset). Observers get the stable descriptor id
/// alongside the entity so host UI code never touches the ECS world.
#[derive(Event, Debug, Clone)]
pub struct HoverChanged {
    pub entity: Entity,
    pub id: String,
    pub hovered: bool,
}
