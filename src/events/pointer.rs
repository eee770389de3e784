//! Pointer input messages from the rendering backend.
//!
//! The backend performs geometric hit-testing: every message already names
//! the first object intersected along the pointer ray, and events never
//! bubble to underlying objects or the background. The router drains the
//! queue once per frame.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// One hit-tested pointer event.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    /// Pointer ray started intersecting this object.
    Enter(Entity),
    /// Pointer ray stopped intersecting this object.
    Exit(Entity),
    /// Click resolved onto this object.
    Click(Entity),
    /// Pointer left the rendering surface entirely; an `Exit` for the
    /// currently hovered object may never arrive.
    SurfaceLeft,
}
