//! Reactive home of the application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppStore` wraps one `RwSignal<AppState>` provided via context. Views
//! read it with [`AppStore::with`] so they re-render on change; workflow
//! actions from the `inventory` crate go through the untracked
//! [`Store`] impl.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use inventory::state::{AppState, Store};
use leptos::prelude::*;

/// Copyable handle to the shared [`AppState`] signal.
#[derive(Clone, Copy, Debug)]
pub struct AppStore(RwSignal<AppState>);

impl AppStore {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(AppState::default()))
    }

    /// Tracked read for use inside reactive closures.
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.0.with(f)
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for AppStore {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        self.0.update(f);
    }
}
