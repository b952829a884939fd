//! Click-or-hover disclosure state machine.
//!
//! A host forwards pointer and click input to a [`Disclosure`] and shows the
//! body of content whenever [`Disclosure::is_open`] is true.

pub mod config;
pub mod disclosure;
pub mod events;

pub use config::{ConfigError, DEFAULT_HOVER_DELAY, DisclosureConfig};
pub use disclosure::{Disclosure, DisclosureId};
pub use events::{DisclosureChange, DisclosureEvent, EventResult};
