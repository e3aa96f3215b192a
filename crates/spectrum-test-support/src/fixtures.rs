//! Settings snapshot fixtures.

use serde_json::{Value, json};
use spectrum_notifications::{CurrentUser, NotificationCategory, NotificationTypes};

/// Address used by confirmed fixture users.
pub const CONFIRMED_EMAIL: &str = "max@spectrum.test";

/// User with a confirmed address and the given notification types.
#[must_use]
pub fn confirmed_user(types: NotificationTypes) -> CurrentUser {
    let mut user = CurrentUser {
        id: "user-1".to_string(),
        email: Some(CONFIRMED_EMAIL.to_string()),
        ..CurrentUser::default()
    };
    user.settings.notifications.types = types;
    user
}

/// User without an address; every category is enabled server-side.
#[must_use]
pub fn unconfirmed_user() -> CurrentUser {
    let mut user = confirmed_user(all_categories(true));
    user.email = None;
    user
}

/// Every category set to `email`, followed by the GraphQL type tag.
#[must_use]
pub fn all_categories(email: bool) -> NotificationTypes {
    NotificationCategory::all()
        .into_iter()
        .fold(NotificationTypes::new(), |types, category| {
            types.with(category, email)
        })
        .with_raw("__typename", json!("UserNotificationsSettings"))
}

/// Raw settings-query payload mixing valid, null and unknown entries.
#[must_use]
pub fn mixed_settings_payload() -> Value {
    json!({
        "data": {
            "user": {
                "id": "user-1",
                "email": CONFIRMED_EMAIL,
                "settings": {
                    "notifications": {
                        "types": {
                            "newMessageInThreads": { "email": true },
                            "newDirectMessage": null,
                            "newReaction": { "email": true },
                            "dailyDigest": { "email": false },
                            "newMention": { "email": true },
                            "__typename": "UserNotificationsSettings"
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_covers_every_category() {
        let types = all_categories(false);
        for category in NotificationCategory::all() {
            assert_eq!(types.setting(category).map(|s| s.email), Some(false));
        }
    }

    #[test]
    fn unconfirmed_user_has_no_email() {
        assert!(!unconfirmed_user().has_confirmed_email());
        assert!(confirmed_user(NotificationTypes::new()).has_confirmed_email());
    }
}
