//! Translate crossterm input into disclosure events.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use disclosure::DisclosureEvent;
use log::trace;

use crate::hover::{HoverTracker, Rect};

/// What the host loop should do in response to one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the controller
    Forward(DisclosureEvent),
    /// Repaint without any state change (resize)
    Redraw,
    /// Tear down and exit
    Quit,
}

/// Convert a terminal event into host actions.
///
/// `region` is the header's hit area from the last paint.
pub fn translate(event: &CrosstermEvent, region: Rect, hover: &mut HoverTracker) -> Vec<Action> {
    match event {
        CrosstermEvent::Key(key) => translate_key(key).into_iter().collect(),
        CrosstermEvent::Mouse(mouse) => translate_mouse(mouse, region, hover),
        CrosstermEvent::FocusLost => hover
            .reset()
            .map(Action::Forward)
            .into_iter()
            .collect(),
        CrosstermEvent::Resize(..) => vec![Action::Redraw],
        _ => Vec::new(),
    }
}

fn translate_key(key: &KeyEvent) -> Option<Action> {
    // Only process key press events (not release/repeat on some terminals)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Forward(DisclosureEvent::Click)),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, region: Rect, hover: &mut HoverTracker) -> Vec<Action> {
    let mut actions = Vec::new();

    // A click can arrive without a preceding move; settle hover first
    if let Some(edge) = hover.update(region, mouse.column, mouse.row) {
        trace!("Hover edge {:?} at ({}, {})", edge, mouse.column, mouse.row);
        actions.push(Action::Forward(edge));
    }

    if mouse.kind == MouseEventKind::Down(MouseButton::Left) && hover.is_inside() {
        actions.push(Action::Forward(DisclosureEvent::Click));
    }

    actions
}
