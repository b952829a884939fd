//! Hit region and hover edge tracking.
//!
//! Terminals report raw mouse positions, not enter/leave. `HoverTracker`
//! turns a stream of positions into edges relative to one region.

use disclosure::DisclosureEvent;

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point lies inside this rectangle.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Tracks whether the pointer is inside the control region.
#[derive(Debug, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer was inside at the last update.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Feed a pointer position; returns an event only on an edge.
    pub fn update(&mut self, region: Rect, x: u16, y: u16) -> Option<DisclosureEvent> {
        let inside = region.contains(x, y);
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            DisclosureEvent::PointerEnter
        } else {
            DisclosureEvent::PointerLeave
        })
    }

    /// Pointer is gone (terminal lost focus); leave if we were inside.
    pub fn reset(&mut self) -> Option<DisclosureEvent> {
        if std::mem::take(&mut self.inside) {
            Some(DisclosureEvent::PointerLeave)
        } else {
            None
        }
    }
}
