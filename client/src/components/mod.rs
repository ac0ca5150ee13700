//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the three panels and the trigger bar while reading and
//! writing panel state from Leptos context providers.

pub mod hazard_item;
pub mod panel_nav;
pub mod predict_panel;
pub mod recent_panel;
pub mod report_panel;
