//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, guards and chrome while reading the injected
//! session from Leptos context.

pub mod directions_link;
pub mod donation_card;
pub mod error_banner;
pub mod listing_card;
pub mod nav_bar;
pub mod require_session;
pub mod stat_tile;
