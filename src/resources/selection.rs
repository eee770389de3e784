use bevy_ecs::prelude::Resource;

/// Outbox of selected display-object ids.
///
/// The selection observer pushes an id here for every click on a display
/// object; the host drains it once per frame via
/// [`Showroom::take_selected`](crate::scene::Showroom::take_selected) to open
/// its detail view. Selection itself is owned by the host; the core only
/// reports events.
#[derive(Resource, Debug, Default)]
pub struct SelectionOutbox {
    selected: Vec<String>,
}

impl SelectionOutbox {
    pub fn push(&mut self, id: impl Into<String>) {
        self.selected.push(id.into());
    }

    /// Drain all pending selections in click order.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selected)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut outbox = SelectionOutbox::default();
        outbox.push("car1");
        outbox.push("car2");
        assert_eq!(outbox.drain(), vec!["car1", "car2"]);
        assert!(outbox.is_empty());
    }
}
