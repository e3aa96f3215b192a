//! Fake capabilities for driving the panel controller in tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use spectrum_notifications::{
    CurrentUser, MutationError, NotificationCategory, NotificationMutations, ToastDispatcher,
    ToastKind, ToggleNotificationInput, UpdateUserEmailInput,
};
use tokio::sync::oneshot;

/// Toast sink that records every dispatch in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingToasts {
    entries: Rc<RefCell<Vec<(ToastKind, String)>>>,
}

impl RecordingToasts {
    /// New empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every toast dispatched so far.
    #[must_use]
    pub fn entries(&self) -> Vec<(ToastKind, String)> {
        self.entries.borrow().clone()
    }

    /// Messages of toasts of `kind`.
    #[must_use]
    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(entry_kind, _)| *entry_kind == kind)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl ToastDispatcher for RecordingToasts {
    fn dispatch(&self, kind: ToastKind, message: String) {
        self.entries.borrow_mut().push((kind, message));
    }
}

/// Scripted result of the next mutation call.
#[derive(Debug)]
pub enum Outcome {
    /// Resolve successfully right away.
    Succeed,
    /// Reject right away with the message.
    Fail(String),
    /// Settle when the paired sender fires; `Err` carries a rejection message.
    Deferred(oneshot::Receiver<Result<(), String>>),
}

#[derive(Debug, Default)]
struct Inner {
    calls: RefCell<Vec<ToggleNotificationInput>>,
    email_calls: RefCell<Vec<UpdateUserEmailInput>>,
    outcomes: RefCell<VecDeque<Outcome>>,
    outcomes_by_category: RefCell<HashMap<NotificationCategory, VecDeque<Outcome>>>,
    snapshot: RefCell<CurrentUser>,
}

/// Mutation fake that plays back queued outcomes and keeps a server-side
/// snapshot. Toggles use their category's queue first, then the shared one;
/// calls with nothing queued succeed.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMutations {
    inner: Rc<Inner>,
}

impl ScriptedMutations {
    /// Fake whose server state starts at `snapshot`.
    #[must_use]
    pub fn new(snapshot: CurrentUser) -> Self {
        let fake = Self::default();
        *fake.inner.snapshot.borrow_mut() = snapshot;
        fake
    }

    /// Queue an outcome for the next call.
    pub fn push(&self, outcome: Outcome) -> &Self {
        self.inner.outcomes.borrow_mut().push_back(outcome);
        self
    }

    /// Queue a rejection with `message`.
    pub fn fail(&self, message: impl Into<String>) -> &Self {
        self.push(Outcome::Fail(message.into()))
    }

    /// Queue a deferred outcome and return the handle that settles it.
    pub fn defer(&self) -> oneshot::Sender<Result<(), String>> {
        let (sender, receiver) = oneshot::channel();
        self.push(Outcome::Deferred(receiver));
        sender
    }

    /// Queue an outcome for the next toggle of `category`.
    pub fn push_for(&self, category: NotificationCategory, outcome: Outcome) -> &Self {
        self.inner
            .outcomes_by_category
            .borrow_mut()
            .entry(category)
            .or_default()
            .push_back(outcome);
        self
    }

    /// Queue a deferred outcome for the next toggle of `category`.
    pub fn defer_for(&self, category: NotificationCategory) -> oneshot::Sender<Result<(), String>> {
        let (sender, receiver) = oneshot::channel();
        self.push_for(category, Outcome::Deferred(receiver));
        sender
    }

    /// Toggle inputs received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<ToggleNotificationInput> {
        self.inner.calls.borrow().clone()
    }

    /// Email update inputs received so far.
    #[must_use]
    pub fn email_calls(&self) -> Vec<UpdateUserEmailInput> {
        self.inner.email_calls.borrow().clone()
    }

    /// Current server-side snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CurrentUser {
        self.inner.snapshot.borrow().clone()
    }

    fn next_outcome(&self, category: Option<NotificationCategory>) -> Option<Outcome> {
        let scoped = category.and_then(|category| {
            self.inner
                .outcomes_by_category
                .borrow_mut()
                .get_mut(&category)
                .and_then(VecDeque::pop_front)
        });
        scoped.or_else(|| self.inner.outcomes.borrow_mut().pop_front())
    }

    async fn settle(&self, category: Option<NotificationCategory>) -> Result<(), MutationError> {
        let outcome = self.next_outcome(category);
        match outcome {
            None | Some(Outcome::Succeed) => Ok(()),
            Some(Outcome::Fail(message)) => Err(MutationError::rejected(message)),
            Some(Outcome::Deferred(receiver)) => match receiver.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(message)) => Err(MutationError::rejected(message)),
                Err(_) => Err(MutationError::transport("request dropped")),
            },
        }
    }
}

#[async_trait(?Send)]
impl NotificationMutations for ScriptedMutations {
    async fn toggle_notification_setting(
        &self,
        input: ToggleNotificationInput,
    ) -> Result<CurrentUser, MutationError> {
        self.inner.calls.borrow_mut().push(input);
        self.settle(Some(input.notification_type)).await?;
        let mut snapshot = self.inner.snapshot.borrow_mut();
        let category = input.notification_type;
        let current = snapshot
            .notification_types()
            .setting(category)
            .is_some_and(|setting| setting.email);
        snapshot.settings.notifications.types.set_email(category, !current);
        Ok(snapshot.clone())
    }

    async fn update_user_email(
        &self,
        input: UpdateUserEmailInput,
    ) -> Result<CurrentUser, MutationError> {
        self.inner.email_calls.borrow_mut().push(input.clone());
        self.settle(None).await?;
        let mut snapshot = self.inner.snapshot.borrow_mut();
        snapshot.email = Some(input.email);
        Ok(snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{all_categories, confirmed_user};

    #[tokio::test]
    async fn unscripted_toggle_flips_server_flag() {
        let fake = ScriptedMutations::new(confirmed_user(all_categories(true)));
        let input = ToggleNotificationInput::email(NotificationCategory::DailyDigest);

        let updated = fake
            .toggle_notification_setting(input)
            .await
            .expect("toggle succeeds");

        assert_eq!(
            updated
                .notification_types()
                .setting(NotificationCategory::DailyDigest)
                .map(|s| s.email),
            Some(false)
        );
        assert_eq!(fake.calls(), vec![input]);
    }

    #[tokio::test]
    async fn scripted_failure_leaves_snapshot_untouched() {
        let fake = ScriptedMutations::new(confirmed_user(all_categories(true)));
        fake.fail("boom");

        let err = fake
            .toggle_notification_setting(ToggleNotificationInput::email(
                NotificationCategory::NewMention,
            ))
            .await
            .expect_err("scripted failure");

        assert_eq!(err.message(), "boom");
        assert_eq!(fake.snapshot(), confirmed_user(all_categories(true)));
    }

    #[tokio::test]
    async fn update_email_records_and_applies_address() {
        let fake = ScriptedMutations::default();
        let input = UpdateUserEmailInput {
            email: "new@spectrum.test".to_string(),
        };

        let updated = fake
            .update_user_email(input.clone())
            .await
            .expect("update succeeds");

        assert_eq!(updated.email.as_deref(), Some("new@spectrum.test"));
        assert_eq!(fake.email_calls(), vec![input]);
    }

    #[tokio::test]
    async fn category_queue_wins_over_shared_queue() {
        let fake = ScriptedMutations::new(confirmed_user(all_categories(true)));
        fake.fail("shared");
        fake.push_for(NotificationCategory::NewMention, Outcome::Succeed);

        let mention = fake
            .toggle_notification_setting(ToggleNotificationInput::email(
                NotificationCategory::NewMention,
            ))
            .await;
        let digest = fake
            .toggle_notification_setting(ToggleNotificationInput::email(
                NotificationCategory::DailyDigest,
            ))
            .await;

        assert!(mention.is_ok());
        assert_eq!(digest.expect_err("shared failure").message(), "shared");
    }

    #[test]
    fn recording_toasts_filters_by_kind() {
        let toasts = RecordingToasts::new();
        toasts.dispatch(ToastKind::Success, "saved".to_string());
        toasts.dispatch(ToastKind::Error, "boom".to_string());

        assert_eq!(toasts.messages(ToastKind::Error), vec!["boom".to_string()]);
        assert_eq!(toasts.entries().len(), 2);
    }
}
