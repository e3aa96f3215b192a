//! GraphQL client for the settings API.
//!
//! # Design
//! - One POST helper; request documents and envelope decoding live in
//!   `spectrum_notifications::graphql`.
//! - Mutation failures stay typed so their message reaches the toast as is.

use anyhow::Context;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use spectrum_notifications::graphql::{
    CurrentUserData, GraphqlRequest, ToggleNotificationSettingsData, UpdateUserEmailData,
    decode_response,
};
use spectrum_notifications::{
    ClientConfig, CurrentUser, MutationError, ToggleNotificationInput, UpdateUserEmailInput,
};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) endpoint: String,
}

impl ApiClient {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.endpoint(),
        }
    }

    async fn post<T: DeserializeOwned>(&self, request: &GraphqlRequest) -> Result<T, MutationError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|err| MutationError::transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| MutationError::transport(err.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|err| MutationError::transport(err.to_string()))?;
        decode_response(&body)
    }

    pub(crate) async fn fetch_current_user(&self) -> anyhow::Result<Option<CurrentUser>> {
        let data: CurrentUserData = self
            .post(&GraphqlRequest::current_user_settings())
            .await
            .context("failed to load notification settings")?;
        Ok(data.user)
    }

    pub(crate) async fn toggle_notification_settings(
        &self,
        input: ToggleNotificationInput,
    ) -> Result<CurrentUser, MutationError> {
        let data: ToggleNotificationSettingsData = self
            .post(&GraphqlRequest::toggle_notification_settings(input))
            .await?;
        Ok(data.toggle_notification_settings)
    }

    pub(crate) async fn update_user_email(
        &self,
        input: &UpdateUserEmailInput,
    ) -> Result<CurrentUser, MutationError> {
        let data: UpdateUserEmailData = self
            .post(&GraphqlRequest::update_user_email(input))
            .await?;
        Ok(data.update_user_email)
    }
}
