//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and form rules from
//! page logic to improve reuse and testability.

pub mod directions;
pub mod donation_form;
pub mod draft_storage;
