//! Shared inventory model and session workflow for the print-shop front-ends.
//!
//! This crate owns everything both the browser UI (`client`) and the terminal
//! client (`cli`) need: the wire types served by the inventory API, the
//! session and view-model state, the form holders, and the actions that
//! drive login, refresh and the loan/return/add-item submissions.
//!
//! HTTP is abstracted behind [`transport::Transport`] so the same workflow
//! runs over `gloo-net` in WASM, `reqwest` natively, and a scripted double
//! in tests.

pub mod actions;
pub mod config;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod state;
pub mod summary;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ApiConfig;
pub use error::{ApiError, FormError, TransportError};
pub use gateway::Gateway;
pub use state::{AppState, LocalStore, Store};
