//! Disclosure controller state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use std::time::Duration;

use log::{debug, trace, warn};
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::config::DisclosureConfig;
use crate::events::{DisclosureChange, EventResult};

/// Unique identifier for a Disclosure instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisclosureId(usize);

impl DisclosureId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DisclosureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__disclosure_{}", self.0)
    }
}

/// A hover-originated open that has been scheduled but not yet fired.
#[derive(Debug)]
struct PendingOpen {
    /// Token the timer task must still match when it fires
    generation: u64,
    task: JoinHandle<()>,
}

/// Internal state for a Disclosure
#[derive(Debug)]
struct DisclosureInner {
    /// Whether the body is visible
    open: bool,
    /// Whether pointer-enter may schedule an open
    hover_eligible: bool,
    /// In-flight delayed open, at most one
    pending: Option<PendingOpen>,
    /// Last generation handed to a timer task
    generation: u64,
    /// Set once by teardown; all later input is ignored
    torn_down: bool,
    /// Visibility last returned from `take_change`
    reported_open: bool,
}

impl Default for DisclosureInner {
    fn default() -> Self {
        Self {
            open: false,
            hover_eligible: true,
            pending: None,
            generation: 0,
            torn_down: false,
            reported_open: false,
        }
    }
}

impl DisclosureInner {
    /// Abort and forget the pending open. Returns whether one existed.
    fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for DisclosureInner {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// A click-or-hover disclosure controller with shared state.
///
/// `Disclosure` decides whether a body of content is visible. A click toggles
/// the body and pins it open; while pinned, hover is ignored until another
/// click closes it. Hovering over the control opens the body after the
/// configured delay, and leaving the control closes a hover-opened body
/// immediately.
///
/// Cloning is cheap and every clone refers to the same controller. The
/// delayed open runs on the ambient tokio runtime and only holds a weak
/// reference, so dropping the last clone cancels it. Pointer-enter must be
/// called from inside a tokio runtime; elsewhere it logs a warning and hover
/// never opens the body.
///
/// # Example
///
/// ```
/// use disclosure::Disclosure;
///
/// let details = Disclosure::new();
/// details.on_click();
/// assert!(details.is_open());
/// details.on_click();
/// assert!(!details.is_open());
/// ```
#[derive(Debug)]
pub struct Disclosure {
    /// Unique identifier for this instance
    id: DisclosureId,
    /// Internal state
    inner: Arc<RwLock<DisclosureInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Signalled when a delayed open changes visibility
    hover_opened: Arc<Notify>,
    config: DisclosureConfig,
}

impl Disclosure {
    /// Create a closed disclosure with the default config.
    ///
    /// Construction needs no runtime, but hover only works when
    /// `on_pointer_enter` is driven from a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(DisclosureConfig::default())
    }

    /// Create a closed disclosure with the given config
    pub fn with_config(config: DisclosureConfig) -> Self {
        Self {
            id: DisclosureId::new(),
            inner: Arc::new(RwLock::new(DisclosureInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            hover_opened: Arc::new(Notify::new()),
            config,
        }
    }

    /// Wait until a delayed open makes the body visible.
    ///
    /// A firing that happens while nobody waits is remembered, so the next
    /// call returns immediately.
    pub async fn hover_opened(&self) {
        self.hover_opened.notified().await;
    }

    /// Get the unique ID for this disclosure
    pub fn id(&self) -> DisclosureId {
        self.id
    }

    /// Get the config this disclosure was created with
    pub fn config(&self) -> &DisclosureConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, DisclosureInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DisclosureInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Check if the body is currently visible
    pub fn is_open(&self) -> bool {
        self.read().open
    }

    /// Check if pointer-enter is currently allowed to open the body
    pub fn is_hover_eligible(&self) -> bool {
        self.read().hover_eligible
    }

    /// Check if a delayed open is in flight
    pub fn has_pending_open(&self) -> bool {
        self.read().pending.is_some()
    }

    /// Check if `teardown` has been called
    pub fn is_torn_down(&self) -> bool {
        self.read().torn_down
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Toggle the body.
    ///
    /// Opening by click pins the body: hover becomes ineligible until a click
    /// closes it again. A pending delayed open is left alone.
    pub fn on_click(&self) -> EventResult {
        let mut inner = self.write();
        if inner.torn_down {
            trace!("{}: click after teardown ignored", self.id);
            return EventResult::Ignored;
        }

        let was_open = inner.open;
        inner.open = !was_open;
        inner.hover_eligible = was_open;
        self.dirty.store(true, Ordering::SeqCst);

        debug!(
            "{}: click {} (hover eligible: {})",
            self.id,
            if inner.open { "opened" } else { "closed" },
            inner.hover_eligible
        );
        EventResult::Consumed
    }

    /// Schedule a delayed open, unless the body is pinned by a click.
    ///
    /// Any earlier pending open is cancelled first so only one is ever in
    /// flight. Requires a tokio runtime; without one the event is ignored.
    pub fn on_pointer_enter(&self) -> EventResult {
        let mut inner = self.write();
        if inner.torn_down {
            trace!("{}: pointer enter after teardown ignored", self.id);
            return EventResult::Ignored;
        }
        if !inner.hover_eligible {
            trace!("{}: pointer enter ignored while pinned", self.id);
            return EventResult::Ignored;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("{}: no tokio runtime, hover open not scheduled", self.id);
            return EventResult::Ignored;
        };

        inner.cancel_pending();
        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;

        let task = runtime.spawn(delayed_open(
            self.id,
            Arc::downgrade(&self.inner),
            Arc::clone(&self.dirty),
            Arc::clone(&self.hover_opened),
            self.config.hover_delay,
            generation,
        ));
        inner.pending = Some(PendingOpen { generation, task });

        debug!(
            "{}: open scheduled in {:?} (generation {})",
            self.id, self.config.hover_delay, generation
        );
        EventResult::Consumed
    }

    /// Cancel any pending open and collapse a hover-opened body.
    ///
    /// A body pinned by a click stays open.
    pub fn on_pointer_leave(&self) -> EventResult {
        let mut inner = self.write();
        if inner.torn_down {
            trace!("{}: pointer leave after teardown ignored", self.id);
            return EventResult::Ignored;
        }

        let cancelled = inner.cancel_pending();
        if cancelled {
            debug!("{}: pending open cancelled by pointer leave", self.id);
        }

        if !inner.hover_eligible {
            return if cancelled {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }

        let was_open = inner.open;
        inner.open = false;
        if was_open {
            self.dirty.store(true, Ordering::SeqCst);
            debug!("{}: pointer leave closed", self.id);
        }

        if was_open || cancelled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Cancel any pending open for good. Visibility is left as is.
    ///
    /// Safe to call more than once.
    pub fn teardown(&self) -> EventResult {
        let mut inner = self.write();
        let cancelled = inner.cancel_pending();
        let first = !inner.torn_down;
        inner.torn_down = true;

        if first {
            debug!("{}: torn down (cancelled pending: {})", self.id, cancelled);
        }

        if first || cancelled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    // -------------------------------------------------------------------------
    // Change tracking
    // -------------------------------------------------------------------------

    /// Report a visibility change since the last call, if any.
    ///
    /// Toggles that cancel out between two calls report nothing.
    pub fn take_change(&self) -> Option<DisclosureChange> {
        let mut inner = self.write();
        if inner.open == inner.reported_open {
            return None;
        }
        inner.reported_open = inner.open;
        Some(DisclosureChange::from_open(inner.open))
    }

    /// Check if the visibility has changed since the last repaint
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Clear the dirty flag, returning whether it was set.
    ///
    /// Call before reading visibility for a repaint so a change landing
    /// after the read stays flagged for the next one.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl Clone for Disclosure {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            hover_opened: Arc::clone(&self.hover_opened),
            config: self.config,
        }
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer body for a hover-originated open.
///
/// Only applies if its generation is still the pending one, so an open that
/// was superseded can never mutate state even if the abort raced the timer.
async fn delayed_open(
    id: DisclosureId,
    state: Weak<RwLock<DisclosureInner>>,
    dirty: Arc<AtomicBool>,
    hover_opened: Arc<Notify>,
    delay: Duration,
    generation: u64,
) {
    tokio::time::sleep(delay).await;

    let Some(state) = state.upgrade() else {
        return;
    };

    let opened = {
        let mut inner = state.write().unwrap_or_else(PoisonError::into_inner);
        let current = inner.pending.as_ref().map(|pending| pending.generation);
        if current != Some(generation) {
            trace!("{}: stale open (generation {}) dropped", id, generation);
            return;
        }

        inner.pending = None;
        let was_open = inner.open;
        inner.open = true;
        !was_open
    };

    if opened {
        dirty.store(true, Ordering::SeqCst);
        debug!("{}: hover opened", id);
        hover_opened.notify_one();
    }
}
