//! Email preferences feature wiring.
//!
//! # Design
//! - Rendering lives in the view; toggle decisions live in the controller
//!   from `spectrum_notifications`.
//! - The store-backed capabilities here are the only place mutations and
//!   toasts touch app state.

pub(crate) mod api;
pub(crate) mod view;

use spectrum_notifications::EmailSettingsController;

/// Controller bound to the live API and store.
pub(crate) type PanelController = EmailSettingsController<api::CachedMutations, api::StoreToasts>;
