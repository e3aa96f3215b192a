//! GraphQL request documents and response envelopes for the settings API.
//!
//! # Design
//! - Requests are plain serde values so any HTTP client can post them.
//! - A response with `errors` is a rejection even when `data` is present;
//!   the first error message is the one shown to the user.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::MutationError;
use crate::model::{CurrentUser, ToggleNotificationInput, UpdateUserEmailInput};

macro_rules! user_settings_fields {
    () => {
        "id email settings { notifications { types { newMessageInThreads { email } newDirectMessage { email } newThreadCreated { email } dailyDigest { email } weeklyDigest { email } newMention { email } __typename } } }"
    };
}

/// Query for the signed-in user's settings snapshot.
pub const CURRENT_USER_SETTINGS_QUERY: &str = concat!(
    "query getCurrentUserSettings { user: currentUser { ",
    user_settings_fields!(),
    " } }"
);

/// Mutation flipping one category's flag.
pub const TOGGLE_NOTIFICATION_SETTINGS_MUTATION: &str = concat!(
    "mutation toggleNotificationSettings($input: ToggleNotificationSettingsInput) { ",
    "toggleNotificationSettings(input: $input) { ",
    user_settings_fields!(),
    " } }"
);

/// Mutation changing the account address.
pub const UPDATE_USER_EMAIL_MUTATION: &str = concat!(
    "mutation updateUserEmail($email: LowercaseString!) { ",
    "updateUserEmail(email: $email) { ",
    user_settings_fields!(),
    " } }"
);

/// Posted request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Operation to execute.
    pub operation_name: &'static str,
    /// Document text.
    pub query: &'static str,
    /// Operation variables.
    pub variables: Value,
}

impl GraphqlRequest {
    /// Settings snapshot query.
    #[must_use]
    pub fn current_user_settings() -> Self {
        Self {
            operation_name: "getCurrentUserSettings",
            query: CURRENT_USER_SETTINGS_QUERY,
            variables: json!({}),
        }
    }

    /// Toggle mutation for `input`.
    #[must_use]
    pub fn toggle_notification_settings(input: ToggleNotificationInput) -> Self {
        Self {
            operation_name: "toggleNotificationSettings",
            query: TOGGLE_NOTIFICATION_SETTINGS_MUTATION,
            variables: json!({ "input": input }),
        }
    }

    /// Email update mutation for `input`.
    #[must_use]
    pub fn update_user_email(input: &UpdateUserEmailInput) -> Self {
        Self {
            operation_name: "updateUserEmail",
            query: UPDATE_USER_EMAIL_MUTATION,
            variables: json!({ "email": input.email.as_str() }),
        }
    }
}

/// One entry of a response's `errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Human-readable message.
    pub message: String,
}

/// Response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Operation result.
    pub data: Option<T>,
    /// Errors reported by the server.
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

impl<T> GraphqlResponse<T> {
    /// Collapse the envelope into the operation result.
    ///
    /// # Errors
    /// Returns [`MutationError::Rejected`] carrying the first error message,
    /// or [`MutationError::Transport`] when neither data nor errors came back.
    pub fn into_result(self) -> Result<T, MutationError> {
        if let Some(first) = self.errors.into_iter().next() {
            return Err(MutationError::rejected(first.message));
        }
        self.data
            .ok_or_else(|| MutationError::transport("response carried no data"))
    }
}

/// `data` of the settings query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUserData {
    /// Signed-in user, absent when signed out.
    pub user: Option<CurrentUser>,
}

/// `data` of the toggle mutation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleNotificationSettingsData {
    /// Updated snapshot.
    pub toggle_notification_settings: CurrentUser,
}

/// `data` of the email update mutation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserEmailData {
    /// Updated snapshot.
    pub update_user_email: CurrentUser,
}

/// Decode a raw response body.
///
/// # Errors
/// Returns [`MutationError::Transport`] for undecodable bodies and whatever
/// [`GraphqlResponse::into_result`] reports otherwise.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, MutationError> {
    serde_json::from_str::<GraphqlResponse<T>>(body)
        .map_err(|err| MutationError::transport(err.to_string()))?
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::NotificationCategory;

    #[test]
    fn documents_select_every_category() {
        for document in [
            CURRENT_USER_SETTINGS_QUERY,
            TOGGLE_NOTIFICATION_SETTINGS_MUTATION,
            UPDATE_USER_EMAIL_MUTATION,
        ] {
            assert!(document.contains(user_settings_fields!()));
            for category in NotificationCategory::all() {
                assert!(document.contains(category.as_key()));
            }
        }
    }

    #[test]
    fn toggle_request_wraps_input() {
        let request = GraphqlRequest::toggle_notification_settings(ToggleNotificationInput::email(
            NotificationCategory::NewMention,
        ));
        let body = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(body["operationName"], "toggleNotificationSettings");
        assert_eq!(
            body["variables"],
            json!({ "input": { "deliveryMethod": "email", "notificationType": "newMention" } })
        );
    }

    #[test]
    fn update_email_request_passes_address() {
        let request = GraphqlRequest::update_user_email(&UpdateUserEmailInput {
            email: "max@example.com".to_string(),
        });
        assert_eq!(request.variables, json!({ "email": "max@example.com" }));
    }

    #[test]
    fn decode_returns_data() {
        let body = r#"{"data":{"toggleNotificationSettings":{"id":"u1","email":"a@b.c","settings":{"notifications":{"types":{"newMention":{"email":false}}}}}}}"#;
        let data: ToggleNotificationSettingsData = decode_response(body).expect("data decodes");
        assert_eq!(data.toggle_notification_settings.id, "u1");
    }

    #[test]
    fn decode_prefers_first_error() {
        let body = r#"{"data":null,"errors":[{"message":"boom"},{"message":"second"}]}"#;
        let err = decode_response::<ToggleNotificationSettingsData>(body).expect_err("rejected");
        assert_eq!(err, MutationError::rejected("boom"));
    }

    #[test]
    fn decode_without_data_is_transport_failure() {
        let err = decode_response::<CurrentUserData>("{}").expect_err("no data");
        assert!(matches!(err, MutationError::Transport { .. }));
        let err = decode_response::<CurrentUserData>("<html>").expect_err("not json");
        assert!(matches!(err, MutationError::Transport { .. }));
    }
}
