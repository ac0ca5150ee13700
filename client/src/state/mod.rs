//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`ui`, `report`, `recent`, `predict`) so each
//! component depends on one small model. Every model is a plain struct with
//! synchronous transition methods; components wrap them in `RwSignal` and
//! drive the async network calls around those transitions.

pub mod predict;
pub mod recent;
pub mod report;
pub mod ui;
