//! Login, refresh, and form-submission workflows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action in `client` and `cli` ends up here. Actions read input
//! from the store, make one gateway call, write the outcome back, and after
//! any successful mutation re-query inventory and audit log from the server.
//! Local lists are never patched.
//!
//! ERROR HANDLING
//! ==============
//! Failures are reduced to one display string, stored next to the view that
//! shows it, and returned as `Err(String)` for callers that need an outcome.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::future::Future;

use crate::error::ApiError;
use crate::forms::{Form, LoanForm, LoginForm, NewItemForm, ReturnForm};
use crate::gateway::Gateway;
use crate::state::{AppForm, AppState, FormSlot, Listing, Session, Store};
use crate::transport::Transport;
use crate::types::{Ack, LoginRequest};

pub const LOGIN_FAILED: &str = "Login failed";
pub const INVENTORY_LOAD_FAILED: &str = "Failed to load inventory";
pub const AUDIT_LOG_LOAD_FAILED: &str = "Failed to load audit log";
pub const LOAN_FAILED: &str = "Loan failed";
pub const RETURN_FAILED: &str = "Return failed";
pub const ADD_ITEM_FAILED: &str = "Failed to add item";

/// Sign in, then load inventory and audit log.
///
/// On failure the session is left as it was and the login form carries the
/// server's message or [`LOGIN_FAILED`].
///
/// # Errors
///
/// The display string stored on the login form.
pub async fn login<T: Transport, S: Store>(
    gateway: &Gateway<T>,
    store: &S,
    email: &str,
    password: &str,
) -> Result<(), String> {
    sign_in(gateway, store, email, password, true).await?;
    if let Err(message) = refresh_all(gateway, store).await {
        tracing::debug!(%message, "initial load after login failed");
    }
    Ok(())
}

/// Sign in without loading either list, for callers that fetch only what
/// they need.
///
/// # Errors
///
/// The display string stored on the login form.
pub async fn authenticate<T: Transport, S: Store>(
    gateway: &Gateway<T>,
    store: &S,
    email: &str,
    password: &str,
) -> Result<(), String> {
    sign_in(gateway, store, email, password, false).await
}

/// With `load` set, both listings are marked pending in the same update that
/// installs the session, so nothing observing the session change starts a
/// second initial load.
async fn sign_in<T: Transport, S: Store>(
    gateway: &Gateway<T>,
    store: &S,
    email: &str,
    password: &str,
    load: bool,
) -> Result<(), String> {
    let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    match gateway.login(&request).await {
        Ok(response) => {
            let session = Session::from_login(email, response);
            tracing::info!(email = %session.email, location = ?session.location, "signed in");
            store.update(|s| {
                s.session = Some(session);
                s.login = FormSlot::default();
                if load {
                    s.inventory.start();
                    s.audit_log.start();
                }
            });
            Ok(())
        }
        Err(err) => {
            let message = err.display_or(LOGIN_FAILED);
            store.update(|s| s.login.error = Some(message.clone()));
            Err(message)
        }
    }
}

/// Sign in with whatever the login form currently holds.
///
/// # Errors
///
/// The display string stored on the login form.
pub async fn submit_login<T: Transport, S: Store>(gateway: &Gateway<T>, store: &S) -> Result<(), String> {
    let request = prepare::<LoginForm, S>(store)?.1;
    login(gateway, store, &request.email, &request.password).await
}

/// Drop the session and everything fetched under it. No network call.
pub fn logout<S: Store>(store: &S) {
    store.update(|s| *s = AppState::default());
    tracing::info!("signed out");
}

/// Replace the inventory view with the server's current list.
///
/// # Errors
///
/// [`INVENTORY_LOAD_FAILED`] when the fetch failed or was not a list.
pub async fn refresh_inventory<T: Transport, S: Store>(gateway: &Gateway<T>, store: &S) -> Result<(), String> {
    let bearer = store.read(AppState::bearer);
    store.update(|s| s.inventory.start());
    let result = gateway.inventory(bearer.as_deref()).await;
    apply(store, bearer.as_deref(), "inventory", |s| &mut s.inventory, result, INVENTORY_LOAD_FAILED)
}

/// Replace the audit-log view with the server's current entries.
///
/// # Errors
///
/// [`AUDIT_LOG_LOAD_FAILED`] when the fetch failed or was not a list.
pub async fn refresh_audit_log<T: Transport, S: Store>(gateway: &Gateway<T>, store: &S) -> Result<(), String> {
    let bearer = store.read(AppState::bearer);
    store.update(|s| s.audit_log.start());
    let result = gateway.audit_log(bearer.as_deref()).await;
    apply(store, bearer.as_deref(), "audit log", |s| &mut s.audit_log, result, AUDIT_LOG_LOAD_FAILED)
}

/// Run both fetchers concurrently. Each view updates as soon as its own
/// response resolves.
///
/// # Errors
///
/// The first failure message, inventory before audit log.
pub async fn refresh_all<T: Transport, S: Store>(gateway: &Gateway<T>, store: &S) -> Result<(), String> {
    let (inventory, audit_log) = futures::join!(refresh_inventory(gateway, store), refresh_audit_log(gateway, store));
    inventory.and(audit_log)
}

/// Submit the loan form.
///
/// # Errors
///
/// The display string stored on the loan form.
pub async fn submit_loan<T: Transport, S: Store>(gateway: &Gateway<T>, store: &S) -> Result<(), String> {
    submit::<LoanForm, _, _, _>(gateway, store, LOAN_FAILED, |bearer, request| async move {
        gateway.loan(bearer.as_deref(), &request).await
    })
    .await
}

/// Submit the return form.
///
/// # Errors
///
/// The display string stored on the return form.
pub async fn submit_return<T: Transport, S: Store>(gateway: &Gateway<T>, store: &S) -> Result<(), String> {
    submit::<ReturnForm, _, _, _>(gateway, store, RETURN_FAILED, |bearer, request| async move {
        gateway.return_item(bearer.as_deref(), &request).await
    })
    .await
}

/// Submit the new-item form.
///
/// # Errors
///
/// The display string stored on the new-item form.
pub async fn submit_new_item<T: Transport, S: Store>(gateway: &Gateway<T>, store: &S) -> Result<(), String> {
    submit::<NewItemForm, _, _, _>(gateway, store, ADD_ITEM_FAILED, |bearer, request| async move {
        gateway.create_item(bearer.as_deref(), &request).await
    })
    .await
}

/// Read the form's request payload along with the current bearer token.
/// A conversion error is written to the form slot.
fn prepare<F: AppForm, S: Store>(store: &S) -> Result<(Option<String>, F::Request), String> {
    let (bearer, prepared) = store.read(|s| (s.bearer(), F::slot(s).fields.to_request()));
    match prepared {
        Ok(request) => Ok((bearer, request)),
        Err(err) => {
            let message = err.to_string();
            store.update(|s| F::slot_mut(s).error = Some(message.clone()));
            Err(message)
        }
    }
}

async fn submit<F, T, S, Fut>(
    gateway: &Gateway<T>,
    store: &S,
    fallback: &str,
    send: impl FnOnce(Option<String>, F::Request) -> Fut,
) -> Result<(), String>
where
    F: AppForm,
    T: Transport,
    S: Store,
    Fut: Future<Output = Result<Ack, ApiError>>,
{
    let (bearer, request) = prepare::<F, S>(store)?;
    let result = send(bearer.clone(), request).await;
    if store.read(AppState::bearer) != bearer {
        tracing::debug!(ok = result.is_ok(), "dropping submit outcome from a previous session");
        return Ok(());
    }
    match result {
        Ok(ack) => {
            store.update(|s| {
                *F::slot_mut(s) = FormSlot::default();
                s.notice = ack.message;
            });
            if let Err(message) = refresh_all(gateway, store).await {
                tracing::debug!(%message, "refresh after submit failed");
            }
            Ok(())
        }
        Err(err) => {
            let message = err.display_or(fallback);
            store.update(|s| {
                F::slot_mut(s).error = Some(message.clone());
                s.notice = None;
            });
            Err(message)
        }
    }
}

/// Write a fetch result into its listing, unless the session changed while
/// the request was in flight.
fn apply<S: Store, I>(
    store: &S,
    bearer: Option<&str>,
    what: &str,
    listing: impl FnOnce(&mut AppState) -> &mut Listing<I>,
    result: Result<Vec<I>, ApiError>,
    failure: &str,
) -> Result<(), String> {
    let current = store.read(AppState::bearer);
    if current.as_deref() != bearer {
        tracing::debug!(what, "dropping response from a previous session");
        return Ok(());
    }
    match result {
        Ok(items) => {
            tracing::debug!(what, count = items.len(), "refreshed");
            store.update(|s| listing(s).replace(items));
            Ok(())
        }
        Err(err) => {
            tracing::debug!(what, error = %err, "refresh failed");
            store.update(|s| listing(s).fail(failure));
            Err(failure.to_owned())
        }
    }
}
