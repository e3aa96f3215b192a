#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Email notification preferences for the Spectrum settings screen.
//!
//! Layout: `category` (static copy table), `model` (settings snapshot wire
//! shapes), `mapper` (snapshot to display rows), `controller` (panel state and
//! toggle flow), `feedback` (toast queue and dispatch seam), `mutations`
//! (mutation seam), `graphql` (request/response envelopes), `config`, `error`.

pub mod category;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod graphql;
pub mod mapper;
pub mod model;
pub mod mutations;

pub use category::{CategoryCopy, Notice, NoticeIcon, NotificationCategory, RowLayout};
pub use config::{ClientConfig, PanelConfig};
pub use controller::{ConfirmEmailView, EmailSettingsController, PanelView, PreferencesView};
pub use error::{ConfigError, MutationError};
pub use feedback::{Toast, ToastDispatcher, ToastKind, ToastQueue};
pub use mapper::{SettingsViewRow, map_notification_rows};
pub use model::{
    CurrentUser, DeliveryMethod, NotificationSetting, NotificationSettings, NotificationTypes,
    ToggleNotificationInput, UpdateUserEmailInput, UserSettings,
};
pub use mutations::NotificationMutations;
