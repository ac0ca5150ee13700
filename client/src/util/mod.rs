//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting rules out of components so they can be
//! tested without a browser.

pub mod hazard_summary;
