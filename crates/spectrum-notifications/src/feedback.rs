//! Toast feedback: the dispatch seam and a bounded queue behind it.
//!
//! # Design
//! - The controller only sees [`ToastDispatcher`]; hosts decide where toasts go.
//! - [`ToastQueue`] keeps ids monotonic and evicts the oldest entry when full.

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS class suffix for the toast host.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier.
    pub id: u64,
    /// Display message.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

/// Capability to show a transient user-facing message.
pub trait ToastDispatcher {
    /// Enqueue a toast.
    fn dispatch(&self, kind: ToastKind, message: String);
}

impl<T: ToastDispatcher + ?Sized> ToastDispatcher for &T {
    fn dispatch(&self, kind: ToastKind, message: String) {
        (**self).dispatch(kind, message);
    }
}

impl<T: ToastDispatcher + ?Sized> ToastDispatcher for std::rc::Rc<T> {
    fn dispatch(&self, kind: ToastKind, message: String) {
        (**self).dispatch(kind, message);
    }
}

/// Default number of toasts kept on screen.
pub const DEFAULT_TOAST_CAPACITY: usize = 4;

/// Bounded FIFO of visible toasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TOAST_CAPACITY)
    }
}

impl ToastQueue {
    /// Empty queue holding at most `capacity` toasts (minimum one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append a toast and return its id. The oldest toasts are evicted past
    /// capacity.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > self.capacity {
            let drain = self.toasts.len() - self.capacity;
            self.toasts.drain(0..drain);
        }
        id
    }

    /// Remove a toast by id. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Toast] {
        &self.toasts
    }

    /// Number of visible toasts.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toast is visible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Maximum number of visible toasts.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Settings saved!");
        let second = queue.push(ToastKind::Error, "boom");
        assert!(second > first);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.as_slice()[1].message, "boom");
    }

    #[test]
    fn push_evicts_oldest_past_capacity() {
        let mut queue = ToastQueue::with_capacity(2);
        queue.push(ToastKind::Success, "a");
        queue.push(ToastKind::Error, "b");
        queue.push(ToastKind::Success, "c");
        let messages: Vec<_> = queue.as_slice().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Success, "saved");
        queue.push(ToastKind::Success, "saved again");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut queue = ToastQueue::with_capacity(0);
        queue.push(ToastKind::Error, "only");
        assert_eq!(queue.capacity(), 1);
        assert!(!queue.is_empty());
    }

    #[test]
    fn kinds_map_to_classes() {
        assert_eq!(ToastKind::Success.as_class(), "success");
        assert_eq!(ToastKind::Error.as_class(), "error");
    }
}
