//! Small helpers shared by pages and components.

pub mod auth;
pub mod format;
