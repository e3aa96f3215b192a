//! Store-backed capabilities for the email preferences controller.
//!
//! # Design
//! - Successful mutations write the returned snapshot into the store.
//! - Toasts are queued in the store and rendered by the toast host.

use crate::services::api::ApiClient;
use crate::store::{SettingsStore, apply_snapshot, push_toast};
use async_trait::async_trait;
use spectrum_notifications::{
    CurrentUser, MutationError, NotificationMutations, ToastDispatcher, ToastKind,
    ToggleNotificationInput, UpdateUserEmailInput,
};
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// API mutations that refresh the cached snapshot on success.
#[derive(Clone)]
pub(crate) struct CachedMutations {
    client: Rc<ApiClient>,
    dispatch: Dispatch<SettingsStore>,
}

impl CachedMutations {
    pub(crate) const fn new(client: Rc<ApiClient>, dispatch: Dispatch<SettingsStore>) -> Self {
        Self { client, dispatch }
    }

    fn cache(&self, user: &CurrentUser) {
        let snapshot = user.clone();
        self.dispatch
            .reduce_mut(move |store| apply_snapshot(store, snapshot));
    }
}

#[async_trait(?Send)]
impl NotificationMutations for CachedMutations {
    async fn toggle_notification_setting(
        &self,
        input: ToggleNotificationInput,
    ) -> Result<CurrentUser, MutationError> {
        let user = self.client.toggle_notification_settings(input).await?;
        self.cache(&user);
        Ok(user)
    }

    async fn update_user_email(
        &self,
        input: UpdateUserEmailInput,
    ) -> Result<CurrentUser, MutationError> {
        let user = self.client.update_user_email(&input).await?;
        self.cache(&user);
        Ok(user)
    }
}

/// Toast sink backed by the store's toast queue.
#[derive(Clone)]
pub(crate) struct StoreToasts {
    dispatch: Dispatch<SettingsStore>,
}

impl StoreToasts {
    pub(crate) const fn new(dispatch: Dispatch<SettingsStore>) -> Self {
        Self { dispatch }
    }
}

impl ToastDispatcher for StoreToasts {
    fn dispatch(&self, kind: ToastKind, message: String) {
        self.dispatch.reduce_mut(move |store| {
            push_toast(store, kind, message);
        });
    }
}
