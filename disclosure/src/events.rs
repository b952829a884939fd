//! Input events and dispatch results.
//!
//! A host translates its own input (mouse, keyboard, lifecycle) into
//! [`DisclosureEvent`]s and feeds them to the controller one at a time.

// =============================================================================
// Input Events
// =============================================================================

/// The four inputs a disclosure understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisclosureEvent {
    /// Explicit activation of the control (click, Enter, Space).
    Click,
    /// Pointer entered the control's interactive region.
    PointerEnter,
    /// Pointer left the control's interactive region.
    PointerLeave,
    /// The widget is being permanently removed.
    Teardown,
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event had no effect on the controller.
    Ignored,
    /// Event changed visibility, scheduled an open, or cancelled one.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

// =============================================================================
// Change Notifications
// =============================================================================

/// Visibility change reported to the host after a repaint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureChange {
    /// Body became visible
    Expanded,
    /// Body became hidden
    Collapsed,
}

impl DisclosureChange {
    pub(crate) fn from_open(open: bool) -> Self {
        if open { Self::Expanded } else { Self::Collapsed }
    }
}
