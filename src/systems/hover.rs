//! Pointer input router.
//!
//! Drains the backend's hit-tested [`PointerInput`] queue once per frame and
//! turns it into per-object hover flags, [`HoverChanged`]/[`Selected`]
//! observer events, and the [`PointerCursor`] output resource.
//!
//! An `Enter` is authoritative: any other object still flagged as hovered is
//! cleared first, so a missed `Exit` (pointer tracking lost) can never leave
//! a stale flag behind. `SurfaceLeft` clears everything.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::displayobject::DisplayObject;
use crate::components::hover::Hoverable;
use crate::events::hover::HoverChanged;
use crate::events::pointer::PointerInput;
use crate::events::select::Selected;
use crate::resources::cursor::PointerCursor;

/// Route queued pointer input into hover flags and notifications.
pub fn pointer_router_system(
    mut messages: MessageReader<PointerInput>,
    mut objects: Query<(Entity, &DisplayObject, &mut Hoverable)>,
    mut cursor: ResMut<PointerCursor>,
    mut commands: Commands,
) {
    for input in messages.read() {
        match *input {
            PointerInput::Enter(target) => {
                // Authoritative: clear stale flags before setting the new one.
                for (entity, object, mut hoverable) in objects.iter_mut() {
                    if entity != target && hoverable.hovered {
                        hoverable.hovered = false;
                        commands.trigger(HoverChanged {
                            entity,
                            id: object.id.clone(),
                            hovered: false,
                        });
                    }
                }
                if let Ok((entity, object, mut hoverable)) = objects.get_mut(target) {
                    if !hoverable.hovered {
                        hoverable.hovered = true;
                        debug!("pointer enter: {}", object.id);
                        commands.trigger(HoverChanged {
                            entity,
                            id: object.id.clone(),
                            hovered: true,
                        });
                    }
                    cursor.pointer = true;
                }
            }
            PointerInput::Exit(target) => {
                if let Ok((entity, object, mut hoverable)) = objects.get_mut(target) {
                    if hoverable.hovered {
                        hoverable.hovered = false;
                        debug!("pointer exit: {}", object.id);
                        commands.trigger(HoverChanged {
                            entity,
                            id: object.id.clone(),
                            hovered: false,
                        });
                    }
                }
                cursor.pointer = false;
            }
            PointerInput::Click(target) => {
                // One selection per click, independent of hover state.
                if let Ok((entity, object, _)) = objects.get_mut(target) {
                    debug!("select: {}", object.id);
                    commands.trigger(Selected {
                        entity,
                        id: object.id.clone(),
                    });
                }
            }
            PointerInput::SurfaceLeft => {
                for (entity, object, mut hoverable) in objects.iter_mut() {
                    if hoverable.hovered {
                        hoverable.hovered = false;
                        commands.trigger(HoverChanged {
                            entity,
                            id: object.id.clone(),
                            hovered: false,
                        });
                    }
                }
                cursor.pointer = false;
            }
        }
    }
}

/// Advance the [`Messages`] queue for [`PointerInput`].
///
/// Run after [`pointer_router_system`] each frame so drained messages are
/// dropped and the queue never grows unbounded.
pub fn pump_pointer_messages(mut messages: ResMut<Messages<PointerInput>>) {
    messages.update();
}
