//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `hazard` owns report validation, lookup and prediction as pure functions;
//! `store` owns persistence. Route handlers stay focused on protocol
//! translation.

pub mod hazard;
pub mod store;
