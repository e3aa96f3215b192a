//! App-wide yewdux store for the settings screen.
//!
//! # Design
//! - The store is the caching layer: mutations write returned snapshots here
//!   and the panel re-renders from it.
//! - Reducers are free functions so they can be tested without a runtime.

use spectrum_notifications::{CurrentUser, ToastKind, ToastQueue};
use yewdux::store::Store;

/// Shared settings state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct SettingsStore {
    /// Latest snapshot of the signed-in user.
    pub user: Option<CurrentUser>,
    /// Status of the initial settings load.
    pub load: LoadState,
    /// Visible toasts.
    pub toasts: ToastQueue,
}

/// Initial load status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the settings query.
    #[default]
    Loading,
    /// A snapshot is available.
    Ready,
    /// The settings query failed.
    Failed(String),
}

/// Message shown when the settings query returns no user.
pub const SIGNED_OUT_MESSAGE: &str = "Sign in to manage your email preferences.";

/// Replace the user snapshot.
pub fn apply_snapshot(store: &mut SettingsStore, user: CurrentUser) {
    store.user = Some(user);
    store.load = LoadState::Ready;
}

/// Record a failed load. An existing snapshot is kept.
pub fn record_load_failure(store: &mut SettingsStore, message: impl Into<String>) {
    if store.user.is_none() {
        store.load = LoadState::Failed(message.into());
    }
}

/// Resize the toast queue, dropping anything already queued.
pub fn configure_toasts(store: &mut SettingsStore, capacity: usize) {
    if store.toasts.capacity() != capacity {
        store.toasts = ToastQueue::with_capacity(capacity);
    }
}

/// Queue a toast and return its id.
pub fn push_toast(store: &mut SettingsStore, kind: ToastKind, message: String) -> u64 {
    store.toasts.push(kind, message)
}

/// Remove a toast by id.
pub fn dismiss_toast(store: &mut SettingsStore, id: u64) {
    store.toasts.dismiss(id);
}
