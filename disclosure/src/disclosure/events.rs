//! Event dispatch for the Disclosure controller.

use crate::events::{DisclosureEvent, EventResult};

use super::Disclosure;

impl Disclosure {
    /// Dispatch a host event to the matching input method.
    pub fn handle(&self, event: DisclosureEvent) -> EventResult {
        match event {
            DisclosureEvent::Click => self.on_click(),
            DisclosureEvent::PointerEnter => self.on_pointer_enter(),
            DisclosureEvent::PointerLeave => self.on_pointer_leave(),
            DisclosureEvent::Teardown => self.teardown(),
        }
    }
}
