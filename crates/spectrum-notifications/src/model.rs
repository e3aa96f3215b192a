//! Wire shapes for the current user's settings snapshot and mutation inputs.
//!
//! # Design
//! - Mirror the GraphQL payload field-for-field (camelCase on the wire).
//! - Treat `null` containers as empty so partial payloads never fail to decode.
//! - Keep the `types` map untyped and ordered; interpretation belongs to the
//!   mapper.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::category::NotificationCategory;

/// Reserved GraphQL key present in every object; never names a category.
pub const TYPENAME_KEY: &str = "__typename";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Snapshot of the signed-in user as returned by the settings query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// User identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Confirmed email address, if any.
    #[serde(default)]
    pub email: Option<String>,
    /// Per-user settings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: UserSettings,
}

impl CurrentUser {
    /// Whether the account has a confirmed address to send email to.
    #[must_use]
    pub fn has_confirmed_email(&self) -> bool {
        self.email.as_deref().is_some_and(|email| !email.is_empty())
    }

    /// Notification types of this snapshot.
    #[must_use]
    pub const fn notification_types(&self) -> &NotificationTypes {
        &self.settings.notifications.types
    }
}

/// User settings container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Notification preferences.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: NotificationSettings,
}

/// Notification preferences container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Category key to per-category record.
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: NotificationTypes,
}

/// Ordered `category key -> { email } | null` map, including `__typename`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationTypes(Map<String, Value>);

impl NotificationTypes {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a category's email flag.
    #[must_use]
    pub fn with(mut self, category: NotificationCategory, email: bool) -> Self {
        self.set_email(category, email);
        self
    }

    /// Builder-style insert of an arbitrary raw entry.
    #[must_use]
    pub fn with_raw(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Set (or insert) a category's email flag, keeping its position.
    pub fn set_email(&mut self, category: NotificationCategory, email: bool) {
        self.0
            .insert(category.as_key().to_string(), json!({ "email": email }));
    }

    /// Entries in wire order, excluding the reserved type tag.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .iter()
            .filter(|(key, _)| key.as_str() != TYPENAME_KEY)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Typed record for a category, when present with a boolean `email`.
    #[must_use]
    pub fn setting(&self, category: NotificationCategory) -> Option<NotificationSetting> {
        self.0
            .get(category.as_key())
            .and_then(NotificationSetting::from_value)
    }

    /// Whether no category entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

impl FromIterator<(String, Value)> for NotificationTypes {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-category email flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSetting {
    /// Whether email delivery is on for the category.
    pub email: bool,
}

impl NotificationSetting {
    /// Read a raw record. `null`, non-objects and records without a boolean
    /// `email` yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let email = value.as_object()?.get("email")?.as_bool()?;
        Some(Self { email })
    }
}

/// Delivery channel a toggle applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Email delivery.
    Email,
}

/// Input of the toggle-notification-setting mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleNotificationInput {
    /// Channel being toggled.
    pub delivery_method: DeliveryMethod,
    /// Category being toggled.
    pub notification_type: NotificationCategory,
}

impl ToggleNotificationInput {
    /// Email toggle for `category`.
    #[must_use]
    pub const fn email(category: NotificationCategory) -> Self {
        Self {
            delivery_method: DeliveryMethod::Email,
            notification_type: category,
        }
    }
}

/// Input of the update-user-email mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserEmailInput {
    /// New address to confirm.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_snapshot_and_keeps_wire_order() {
        let user: CurrentUser = serde_json::from_value(json!({
            "id": "u1",
            "email": "max@example.com",
            "settings": { "notifications": { "types": {
                "weeklyDigest": { "email": false },
                "newMention": { "email": true },
                "__typename": "NotificationSettingsType"
            }}}
        }))
        .expect("snapshot decodes");

        assert!(user.has_confirmed_email());
        let keys: Vec<_> = user.notification_types().entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["weeklyDigest", "newMention"]);
    }

    #[test]
    fn null_containers_decode_as_empty() {
        let user: CurrentUser = serde_json::from_value(json!({
            "id": "u2",
            "email": null,
            "settings": { "notifications": null }
        }))
        .expect("snapshot decodes");

        assert!(!user.has_confirmed_email());
        assert!(user.notification_types().is_empty());
    }

    #[test]
    fn empty_email_is_not_confirmed() {
        let user = CurrentUser {
            email: Some(String::new()),
            ..CurrentUser::default()
        };
        assert!(!user.has_confirmed_email());
    }

    #[test]
    fn setting_reads_only_boolean_records() {
        let types = NotificationTypes::new()
            .with(NotificationCategory::DailyDigest, false)
            .with_raw("newMention", Value::Null)
            .with_raw("newDirectMessage", json!({ "email": "yes" }));

        assert_eq!(
            types.setting(NotificationCategory::DailyDigest),
            Some(NotificationSetting { email: false })
        );
        assert_eq!(types.setting(NotificationCategory::NewMention), None);
        assert_eq!(types.setting(NotificationCategory::NewDirectMessage), None);
    }

    #[test]
    fn set_email_keeps_position() {
        let mut types = NotificationTypes::new()
            .with(NotificationCategory::NewMention, true)
            .with(NotificationCategory::DailyDigest, true);
        types.set_email(NotificationCategory::NewMention, false);

        let keys: Vec<_> = types.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["newMention", "dailyDigest"]);
        assert_eq!(
            types.setting(NotificationCategory::NewMention),
            Some(NotificationSetting { email: false })
        );
    }

    #[test]
    fn toggle_input_serializes_wire_shape() {
        let input = ToggleNotificationInput::email(NotificationCategory::NewThreadCreated);
        assert_eq!(
            serde_json::to_value(input).expect("input serializes"),
            json!({ "deliveryMethod": "email", "notificationType": "newThreadCreated" })
        );
    }
}
