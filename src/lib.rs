//! Windows Explorer context-menu extension: a cascading "Context Menu Edit"
//! entry backed by a configurable list of actions.
//!
//! The platform-neutral core (action registry, enumeration cursor, visibility
//! rules, settings) lives at the crate root; the COM surface Explorer talks to
//! is under [`shellext`] and only builds on Windows.

pub mod logging;
pub mod registry;
pub mod settings;
pub mod state;

#[cfg(windows)]
pub mod shellext;
