//! Settings snapshot to display-row mapping.
//!
//! # Design
//! - Pure: the same snapshot always yields the same rows.
//! - Unknown keys and `null` records are skipped; nothing here returns an
//!   error.

use serde_json::Value;
use tracing::debug;

use crate::category::{Notice, NotificationCategory, RowLayout};
use crate::model::{NotificationSetting, NotificationTypes};

/// Display-ready preference row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsViewRow {
    /// Category the row toggles.
    pub category: NotificationCategory,
    /// Checkbox label.
    pub label: &'static str,
    /// Current email flag.
    pub email_enabled: bool,
    /// Checkbox alignment.
    pub layout: RowLayout,
    /// Supplementary notice.
    pub notice: Option<&'static Notice>,
}

impl SettingsViewRow {
    /// Row for `category` with its static copy attached.
    #[must_use]
    pub fn new(category: NotificationCategory, email_enabled: bool) -> Self {
        let copy = category.copy();
        Self {
            category,
            label: copy.label,
            email_enabled,
            layout: copy.layout,
            notice: copy.notice.as_ref(),
        }
    }

    /// Control identifier; the category's wire key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.category.as_key()
    }
}

/// Map a notification `types` record into ordered rows.
///
/// Rows follow the record's key order. `__typename`, unrecognized keys,
/// `null` records and records without a boolean `email` produce no row.
#[must_use]
pub fn map_notification_rows(types: &NotificationTypes) -> Vec<SettingsViewRow> {
    let rows: Vec<SettingsViewRow> = types
        .entries()
        .filter_map(|(key, value)| map_entry(key, value))
        .collect();
    debug!(
        rows = rows.len(),
        dropped = types.entries().count() - rows.len(),
        "mapped notification settings"
    );
    rows
}

fn map_entry(key: &str, value: &Value) -> Option<SettingsViewRow> {
    if value.is_null() {
        return None;
    }
    let category = NotificationCategory::from_key(key)?;
    let setting = NotificationSetting::from_value(value)?;
    Some(SettingsViewRow::new(category, setting.email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_recognized_categories_in_wire_order() {
        let types = NotificationTypes::new()
            .with(NotificationCategory::WeeklyDigest, true)
            .with(NotificationCategory::NewMessageInThreads, false)
            .with_raw("__typename", json!("NotificationSettingsType"));

        let rows = map_notification_rows(&types);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, NotificationCategory::WeeklyDigest);
        assert!(rows[0].email_enabled);
        assert_eq!(rows[0].layout, RowLayout::Centered);
        assert_eq!(rows[1].category, NotificationCategory::NewMessageInThreads);
        assert!(!rows[1].email_enabled);
        assert_eq!(rows[1].key(), "newMessageInThreads");
        assert!(rows[1].notice.is_some());
    }

    #[test]
    fn drops_null_and_unknown_entries() {
        let types = NotificationTypes::new()
            .with_raw("newMention", Value::Null)
            .with_raw("newReaction", json!({ "email": true }))
            .with_raw("null", json!({ "email": true }))
            .with(NotificationCategory::DailyDigest, true);

        let rows = map_notification_rows(&types);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, NotificationCategory::DailyDigest);
    }

    #[test]
    fn drops_records_without_boolean_email() {
        let types = NotificationTypes::new()
            .with_raw("newDirectMessage", json!({}))
            .with_raw("newThreadCreated", json!({ "email": null }))
            .with_raw("dailyDigest", json!(true));

        assert!(map_notification_rows(&types).is_empty());
    }

    #[test]
    fn explicit_false_keeps_an_unchecked_row() {
        let types = NotificationTypes::new().with(NotificationCategory::NewDirectMessage, false);

        let rows = map_notification_rows(&types);

        assert_eq!(rows.len(), 1);
        assert!(!rows[0].email_enabled);
    }

    #[test]
    fn empty_types_yield_no_rows() {
        assert!(map_notification_rows(&NotificationTypes::new()).is_empty());
        let only_tag = NotificationTypes::new().with_raw("__typename", json!("X"));
        assert!(map_notification_rows(&only_tag).is_empty());
    }

    #[test]
    fn rows_carry_static_labels() {
        for category in NotificationCategory::all() {
            let row = SettingsViewRow::new(category, true);
            assert_eq!(row.label, category.label());
            assert!(!row.label.is_empty());
        }
    }
}
