//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` provides the `gloo-net` transport the `inventory` gateway runs on,
//! and the helper that runs workflow actions off the event handler.

pub mod api;
