//! Session and view-model state shared by every front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppState` is the whole UI model: who is signed in, the last-fetched
//! inventory and audit log, and one slot per form. Where it lives is up to
//! the front-end: the browser keeps it in a Leptos signal, the CLI in a
//! [`LocalStore`]. Actions reach it only through [`Store`].

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::forms::{Form, LoanForm, LoginForm, NewItemForm, ReturnForm};
use crate::types::{AuditLogEntry, InventoryItem, LoginResponse};

/// The signed-in user. Lives only in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub token: String,
    /// Shop location the user is assigned to, if the server reported one.
    pub location: Option<String>,
}

impl Session {
    /// Build a session from the login payload, falling back to the email the
    /// user typed when the server does not echo one.
    #[must_use]
    pub fn from_login(submitted_email: &str, response: LoginResponse) -> Self {
        Self {
            email: response.email.unwrap_or_else(|| submitted_email.to_owned()),
            token: response.token,
            location: response.location,
        }
    }
}

/// Last-fetched server list plus the error from the most recent fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
    /// Whether any fetch has resolved since the last reset.
    pub loaded: bool,
    /// A fetch has been issued and not yet applied.
    pub pending: bool,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { items: Vec::new(), error: None, loaded: false, pending: false }
    }
}

impl<T> Listing<T> {
    /// Mark a fetch as in flight. Items and error are left as they are.
    pub fn start(&mut self) {
        self.pending = true;
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
        self.loaded = true;
        self.pending = false;
    }

    /// Record a failed fetch. The table is emptied so it never shows data
    /// the server did not just confirm.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.error = Some(message.into());
        self.loaded = true;
        self.pending = false;
    }
}

/// A form's input plus the error from its last submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSlot<F> {
    pub fields: F,
    pub error: Option<String>,
}

/// The complete front-end model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
    pub inventory: Listing<InventoryItem>,
    pub audit_log: Listing<AuditLogEntry>,
    pub login: FormSlot<LoginForm>,
    pub loan: FormSlot<LoanForm>,
    pub return_form: FormSlot<ReturnForm>,
    pub new_item: FormSlot<NewItemForm>,
    /// Confirmation from the last successful mutation, e.g. `"Item loaned"`.
    pub notice: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    /// Signed in, but neither list has been fetched or requested yet.
    #[must_use]
    pub fn needs_initial_load(&self) -> bool {
        self.is_authenticated()
            && !self.inventory.loaded
            && !self.audit_log.loaded
            && !self.inventory.pending
            && !self.audit_log.pending
    }
}

/// A form with a fixed slot in [`AppState`].
pub trait AppForm: Form {
    fn slot(state: &AppState) -> &FormSlot<Self>;

    fn slot_mut(state: &mut AppState) -> &mut FormSlot<Self>;
}

impl AppForm for LoginForm {
    fn slot(state: &AppState) -> &FormSlot<Self> {
        &state.login
    }

    fn slot_mut(state: &mut AppState) -> &mut FormSlot<Self> {
        &mut state.login
    }
}

impl AppForm for LoanForm {
    fn slot(state: &AppState) -> &FormSlot<Self> {
        &state.loan
    }

    fn slot_mut(state: &mut AppState) -> &mut FormSlot<Self> {
        &mut state.loan
    }
}

impl AppForm for ReturnForm {
    fn slot(state: &AppState) -> &FormSlot<Self> {
        &state.return_form
    }

    fn slot_mut(state: &mut AppState) -> &mut FormSlot<Self> {
        &mut state.return_form
    }
}

impl AppForm for NewItemForm {
    fn slot(state: &AppState) -> &FormSlot<Self> {
        &state.new_item
    }

    fn slot_mut(state: &mut AppState) -> &mut FormSlot<Self> {
        &mut state.new_item
    }
}

/// Somewhere [`AppState`] lives.
///
/// Closures must not call back into the same store.
pub trait Store {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;

    fn update(&self, f: impl FnOnce(&mut AppState));

    fn snapshot(&self) -> AppState {
        self.read(Clone::clone)
    }
}

/// Single-threaded shared store for native front-ends and tests.
#[derive(Clone, Debug, Default)]
pub struct LocalStore(Rc<RefCell<AppState>>);

impl LocalStore {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }
}

impl Store for LocalStore {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.0.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.0.borrow_mut());
    }
}
