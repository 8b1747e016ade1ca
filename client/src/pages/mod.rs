//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap their content in `RequireSession`.

pub mod dashboard;
pub mod donation_detail;
pub mod donation_new;
pub mod donor;
pub mod foodbank;
pub mod individual;
pub mod login;
pub mod register;
pub mod statistics;
pub mod volunteer;
