//! Selection notification and the outbox observer.
//!
//! A click on a display object triggers exactly one [`Selected`] event,
//! regardless of hover state. The bundled observer copies the id into the
//! [`SelectionOutbox`] resource so hosts without their own observer can poll
//! selections through [`Showroom::take_selected`](crate::scene::Showroom::take_selected).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::selection::SelectionOutbox;

/// A display object was clicked.
#[derive(Event, Debug, Clone)]
pub struct Selected {
    pub entity: Entity,
    pub id: String,
}

/// Observer that records every selection in the [`SelectionOutbox`].
pub fn selection_outbox_observer(
    trigger: On<Selected>,
    mut outbox: ResMut<SelectionOutbox>,
) {
    outbox.push(trigger.event().id.clone());
}
