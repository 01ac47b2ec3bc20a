//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell, tables and forms while reading/writing the
//! shared `AppStore` from Leptos context.

pub mod audit_log_table;
pub mod form_panel;
pub mod header;
pub mod inventory_table;
pub mod notice;
pub mod summary_cards;
