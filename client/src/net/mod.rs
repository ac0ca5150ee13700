//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the three JSON endpoints. Wire types live in the shared
//! `hazards` crate so the server and client cannot drift.

pub mod api;
