use bevy_ecs::prelude::Resource;

/// Pointer cursor style requested by the hover router.
///
/// The core never touches the OS cursor; it records the desired style here
/// and the host shell applies it. `pointer` is true while a display object
/// is under the pointer.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PointerCursor {
    pub pointer: bool,
}
