//! Terminal host for a single disclosure.
//!
//! Renders the header, indicator, hint and body, and forwards mouse and key
//! input to a [`disclosure::Disclosure`].

pub mod app;
pub mod config;
pub mod error;
pub mod hover;
pub mod input;
pub mod logging;
pub mod render;
pub mod terminal;

pub use config::TermConfig;
pub use error::TermError;
