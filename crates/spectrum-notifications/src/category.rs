//! Notification categories and their static display copy.
//!
//! # Design
//! - The category set is closed; unknown wire keys never become a variant.
//! - Copy lives in one table indexed by variant so adding a category is a
//!   single edit.

use serde::{Deserialize, Serialize};

/// Notification category a user can receive email for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationCategory {
    /// Replies in threads and private conversations the user is active in.
    NewMessageInThreads,
    /// New direct messages.
    NewDirectMessage,
    /// New threads published in channels the user follows.
    NewThreadCreated,
    /// Daily digest of top conversations.
    DailyDigest,
    /// Weekly digest of top conversations.
    WeeklyDigest,
    /// Someone @mentioned the user.
    NewMention,
}

impl NotificationCategory {
    /// Every category in table order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::NewMessageInThreads,
            Self::NewDirectMessage,
            Self::NewThreadCreated,
            Self::DailyDigest,
            Self::WeeklyDigest,
            Self::NewMention,
        ]
    }

    /// Wire key used in the settings snapshot and mutation input.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::NewMessageInThreads => "newMessageInThreads",
            Self::NewDirectMessage => "newDirectMessage",
            Self::NewThreadCreated => "newThreadCreated",
            Self::DailyDigest => "dailyDigest",
            Self::WeeklyDigest => "weeklyDigest",
            Self::NewMention => "newMention",
        }
    }

    /// Resolve a wire key. Unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|category| category.as_key() == key)
    }

    /// Static copy for this category.
    #[must_use]
    pub fn copy(self) -> &'static CategoryCopy {
        &CATEGORY_COPY[self as usize]
    }

    /// Checkbox label.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.copy().label
    }

    /// Alignment of the checkbox against its label.
    #[must_use]
    pub fn layout(self) -> RowLayout {
        self.copy().layout
    }

    /// Supplementary notice rendered under the label, if any.
    #[must_use]
    pub fn notice(self) -> Option<&'static Notice> {
        self.copy().notice.as_ref()
    }
}

/// Checkbox alignment hint for a preference row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowLayout {
    /// Align to the first line of a multi-line label.
    Leading,
    /// Center against a single-line label.
    Centered,
}

impl RowLayout {
    /// CSS `align-items` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Leading => "flex-start",
            Self::Centered => "center",
        }
    }
}

/// Glyph shown inline inside a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeIcon {
    /// The per-thread notification bell.
    Notification,
}

impl NoticeIcon {
    /// Icon glyph name.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Notification => "notification",
        }
    }
}

/// Informational text appended to a row.
///
/// Rendered as `emphasis`, `body`, the optional inline icon, then `trailer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Notice {
    /// Bold lead-in sentence.
    pub emphasis: Option<&'static str>,
    /// Main notice text.
    pub body: &'static str,
    /// Icon placed after the body.
    pub icon: Option<NoticeIcon>,
    /// Text placed after the icon.
    pub trailer: Option<&'static str>,
}

/// Display copy for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CategoryCopy {
    /// Category this entry belongs to.
    pub category: NotificationCategory,
    /// Checkbox label.
    pub label: &'static str,
    /// Checkbox alignment.
    pub layout: RowLayout,
    /// Optional supplementary notice.
    pub notice: Option<Notice>,
}

// Indexed by `NotificationCategory as usize`; order must follow the enum.
static CATEGORY_COPY: [CategoryCopy; 6] = [
    CategoryCopy {
        category: NotificationCategory::NewMessageInThreads,
        label: "Email me when people respond in the threads and private conversations where I'm active - this includes direct messages.",
        layout: RowLayout::Leading,
        notice: Some(Notice {
            emphasis: Some("Trying to mute a specific conversation?"),
            body: "You can turn off email notifications for individual threads by clicking on the notification icon",
            icon: Some(NoticeIcon::Notification),
            trailer: Some("at the top of a post."),
        }),
    },
    CategoryCopy {
        category: NotificationCategory::NewDirectMessage,
        label: "Email me when I receive new direct messages.",
        layout: RowLayout::Centered,
        notice: None,
    },
    CategoryCopy {
        category: NotificationCategory::NewThreadCreated,
        label: "Email me when a new thread is published in channels where I receive notifications.",
        layout: RowLayout::Leading,
        notice: Some(Notice {
            emphasis: None,
            body: "You can turn off email notifications for individual channels by turning thread notifications off on in the sidebar of the individual channel\u{2019}s page.",
            icon: None,
            trailer: None,
        }),
    },
    CategoryCopy {
        category: NotificationCategory::DailyDigest,
        label: "Email me every day with the top conversations in my communities.",
        layout: RowLayout::Centered,
        notice: None,
    },
    CategoryCopy {
        category: NotificationCategory::WeeklyDigest,
        label: "Email me once every week with the top conversations in my communities",
        layout: RowLayout::Centered,
        notice: None,
    },
    CategoryCopy {
        category: NotificationCategory::NewMention,
        label: "Email me if someone @mentions me on Spectrum",
        layout: RowLayout::Leading,
        notice: Some(Notice {
            emphasis: None,
            body: "If you mute a specific conversation, new @mentions will not send you an email.",
            icon: None,
            trailer: None,
        }),
    },
];
