//! Mutation seam for settings changes.

use async_trait::async_trait;

use crate::error::MutationError;
use crate::model::{CurrentUser, ToggleNotificationInput, UpdateUserEmailInput};

/// Settings mutations backed by the API.
///
/// Futures are not required to be `Send`; the panel runs on a single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait NotificationMutations {
    /// Flip the persisted flag for one category and delivery channel.
    ///
    /// # Errors
    /// Returns [`MutationError`] when the server rejects the change or the
    /// request fails.
    async fn toggle_notification_setting(
        &self,
        input: ToggleNotificationInput,
    ) -> Result<CurrentUser, MutationError>;

    /// Change the account address and start confirmation.
    ///
    /// # Errors
    /// Returns [`MutationError`] when the server rejects the address or the
    /// request fails.
    async fn update_user_email(
        &self,
        input: UpdateUserEmailInput,
    ) -> Result<CurrentUser, MutationError>;
}

#[async_trait(?Send)]
impl<T: NotificationMutations + ?Sized> NotificationMutations for std::rc::Rc<T> {
    async fn toggle_notification_setting(
        &self,
        input: ToggleNotificationInput,
    ) -> Result<CurrentUser, MutationError> {
        (**self).toggle_notification_setting(input).await
    }

    async fn update_user_email(
        &self,
        input: UpdateUserEmailInput,
    ) -> Result<CurrentUser, MutationError> {
        (**self).update_user_email(input).await
    }
}
