use bevy_ecs::prelude::Component;

/// Identity of an interactive display object (a car on the show floor).
///
/// Created once at scene construction from a descriptor and never mutated by
/// the animation core. The `id` is the stable key used by pointer routing and
/// selection notifications; `label` is the human-readable name the host UI
/// shows next to a hovered object.
#[derive(Component, Clone, Debug)]
pub struct DisplayObject {
    pub id: String,
    pub label: String,
}

impl DisplayObject {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
