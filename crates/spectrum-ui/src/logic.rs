//! Pure UI helpers shared by components.
//!
//! # Design
//! - No DOM access here, so the rules run in native tests.

use spectrum_notifications::Toast;

/// Result of a click on a checkbox bound to snapshot state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlledChange {
    /// State the input must show until a new snapshot arrives.
    pub displayed: bool,
    /// State the user asked for.
    pub requested: bool,
}

/// Resolve a click on a checkbox whose checked state is owned by the snapshot.
///
/// The browser flips the input before the change handler runs. The box is put
/// back to the snapshot value and only the request is forwarded, so a failed
/// save leaves the box showing what the server last reported.
#[must_use]
pub const fn controlled_change(snapshot_checked: bool, input_checked: bool) -> ControlledChange {
    ControlledChange {
        displayed: snapshot_checked,
        requested: input_checked,
    }
}

/// Timer changes needed to match the visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerPlan {
    /// Toasts that just appeared and need a dismiss timer.
    pub start: Vec<u64>,
    /// Toasts that are gone and whose timers should be dropped.
    pub cancel: Vec<u64>,
}

/// Compare scheduled timer ids against the visible toasts.
///
/// Toasts that already have a timer keep it, so each toast is dismissed
/// `timeout` after it appeared regardless of later arrivals.
#[must_use]
pub fn reconcile_toast_timers(scheduled: &[u64], visible: &[Toast]) -> TimerPlan {
    let start = visible
        .iter()
        .map(|toast| toast.id)
        .filter(|id| !scheduled.contains(id))
        .collect();
    let cancel = scheduled
        .iter()
        .copied()
        .filter(|id| !visible.iter().any(|toast| toast.id == *id))
        .collect();
    TimerPlan { start, cancel }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_notifications::{ToastKind, ToastQueue};

    #[test]
    fn click_requests_flip_but_keeps_snapshot_state() {
        let change = controlled_change(false, true);
        assert!(!change.displayed);
        assert!(change.requested);

        let change = controlled_change(true, false);
        assert!(change.displayed);
        assert!(!change.requested);
    }

    #[test]
    fn new_toast_does_not_restart_existing_timers() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Settings saved!");
        let plan = reconcile_toast_timers(&[], queue.as_slice());
        assert_eq!(plan.start, vec![first]);

        let second = queue.push(ToastKind::Error, "boom");
        let plan = reconcile_toast_timers(&[first], queue.as_slice());
        assert_eq!(plan.start, vec![second]);
        assert!(plan.cancel.is_empty());
    }

    #[test]
    fn dismissed_toast_timer_is_cancelled() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Settings saved!");
        let second = queue.push(ToastKind::Error, "boom");
        queue.dismiss(first);

        let plan = reconcile_toast_timers(&[first, second], queue.as_slice());
        assert!(plan.start.is_empty());
        assert_eq!(plan.cancel, vec![first]);
    }
}
