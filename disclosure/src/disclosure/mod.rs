//! Disclosure controller - click to pin, hover to peek.
//!
//! The controller owns three pieces of state: whether the body is open,
//! whether hover may open it, and at most one pending delayed open.
//!
//! | Event          | Effect                                                        |
//! |----------------|---------------------------------------------------------------|
//! | click          | toggle; opening pins (hover off), closing unpins (hover on)   |
//! | pointer enter  | if hover is on, open after the configured delay               |
//! | pointer leave  | cancel pending open; if hover is on, close                    |
//! | teardown       | cancel pending open, ignore everything afterwards             |

mod events;
mod state;

pub use state::{Disclosure, DisclosureId};
