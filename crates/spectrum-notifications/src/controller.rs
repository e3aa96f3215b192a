//! Email preferences panel controller.
//!
//! # Design
//! - Which view to show depends only on the user snapshot handed in.
//! - Toggles go through injected capabilities; the controller holds no
//!   mutable state, so displayed values always come from the latest snapshot.
//! - Failures end as error toasts and are never propagated.

use tracing::{info, warn};

use crate::category::NotificationCategory;
use crate::config::PanelConfig;
use crate::feedback::{ToastDispatcher, ToastKind};
use crate::mapper::{SettingsViewRow, map_notification_rows};
use crate::model::{CurrentUser, ToggleNotificationInput};
use crate::mutations::NotificationMutations;

/// Heading of the confirmation prompt.
pub const CONFIRM_EMAIL_HEADING: &str = "Turn on email notifications";
/// Body copy of the confirmation prompt.
pub const CONFIRM_EMAIL_DESCRIPTION: &str = "You can customize your email notifications to keep up to date on what\u{2019}s important to you on Spectrum. Enter your email below and we\u{2019}ll send you a confirmation link.";
/// Heading of the preference list.
pub const PREFERENCES_HEADING: &str = "Email Preferences";

/// Prompt shown while the account has no confirmed email.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmEmailView {
    /// Card heading.
    pub heading: &'static str,
    /// Explanatory copy above the confirmation slot.
    pub description: &'static str,
}

/// Preference list shown once an email is confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferencesView {
    /// Card heading.
    pub heading: &'static str,
    /// One checkbox row per applicable category.
    pub rows: Vec<SettingsViewRow>,
}

/// Top-level panel state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// No confirmed email: prompt and delegate to the confirmation flow.
    ConfirmEmail(ConfirmEmailView),
    /// Confirmed email: toggle rows.
    Preferences(PreferencesView),
}

impl PanelView {
    /// Select the view for a user snapshot.
    #[must_use]
    pub fn for_user(user: &CurrentUser) -> Self {
        if !user.has_confirmed_email() {
            return Self::ConfirmEmail(ConfirmEmailView {
                heading: CONFIRM_EMAIL_HEADING,
                description: CONFIRM_EMAIL_DESCRIPTION,
            });
        }
        Self::Preferences(PreferencesView {
            heading: PREFERENCES_HEADING,
            rows: map_notification_rows(user.notification_types()),
        })
    }

    /// Card heading.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::ConfirmEmail(view) => view.heading,
            Self::Preferences(view) => view.heading,
        }
    }

    /// Toggle rows; empty while confirmation is pending.
    #[must_use]
    pub fn rows(&self) -> &[SettingsViewRow] {
        match self {
            Self::ConfirmEmail(_) => &[],
            Self::Preferences(view) => &view.rows,
        }
    }
}

/// Mediates toggles into mutations and feedback toasts.
#[derive(Debug)]
pub struct EmailSettingsController<M, T> {
    mutations: M,
    toasts: T,
    config: PanelConfig,
}

impl<M, T> EmailSettingsController<M, T>
where
    M: NotificationMutations,
    T: ToastDispatcher,
{
    /// Build a controller over the given capabilities.
    pub const fn new(mutations: M, toasts: T, config: PanelConfig) -> Self {
        Self {
            mutations,
            toasts,
            config,
        }
    }

    /// View for the given snapshot.
    #[must_use]
    pub fn view(&self, user: &CurrentUser) -> PanelView {
        PanelView::for_user(user)
    }

    /// Toggle email delivery for `category` and report the outcome as a toast.
    ///
    /// Overlapping calls are independent; each dispatches exactly one toast
    /// when its own mutation settles.
    #[allow(clippy::future_not_send)]
    pub async fn handle_change(&self, category: NotificationCategory) {
        let input = ToggleNotificationInput::email(category);
        match self.mutations.toggle_notification_setting(input).await {
            Ok(_) => {
                info!(category = category.as_key(), "notification setting saved");
                self.toasts
                    .dispatch(ToastKind::Success, self.config.success_message.clone());
            }
            Err(err) => {
                warn!(
                    category = category.as_key(),
                    error = %err,
                    "notification setting toggle failed"
                );
                self.toasts
                    .dispatch(ToastKind::Error, err.message().to_string());
            }
        }
    }

    /// Injected mutations.
    pub const fn mutations(&self) -> &M {
        &self.mutations
    }

    /// Injected toast dispatcher.
    pub const fn toasts(&self) -> &T {
        &self.toasts
    }

    /// Active panel configuration.
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationTypes;

    fn user(email: Option<&str>, types: NotificationTypes) -> CurrentUser {
        let mut user = CurrentUser {
            id: "u1".to_string(),
            email: email.map(str::to_string),
            ..CurrentUser::default()
        };
        user.settings.notifications.types = types;
        user
    }

    #[test]
    fn missing_email_shows_prompt_without_rows() {
        let types = NotificationTypes::new().with(NotificationCategory::DailyDigest, true);
        let view = PanelView::for_user(&user(None, types));

        assert!(matches!(view, PanelView::ConfirmEmail(_)));
        assert_eq!(view.heading(), CONFIRM_EMAIL_HEADING);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn confirmed_email_shows_mapped_rows() {
        let types = NotificationTypes::new().with(NotificationCategory::NewMention, true);
        let view = PanelView::for_user(&user(Some("max@example.com"), types));

        assert_eq!(view.heading(), PREFERENCES_HEADING);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].category, NotificationCategory::NewMention);
        assert!(view.rows()[0].email_enabled);
    }

    #[test]
    fn confirmed_email_with_empty_types_shows_empty_list() {
        let view = PanelView::for_user(&user(Some("max@example.com"), NotificationTypes::new()));

        assert!(matches!(view, PanelView::Preferences(_)));
        assert!(view.rows().is_empty());
    }
}
