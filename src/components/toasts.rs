//! Bookkeeping for the toast stack. The queue is plain data so the view layer
//! only has to render it and schedule dismissals.

/// How long a toast stays up before it dismisses itself.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;
/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Appends a toast and returns its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });

        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Removes a toast; unknown ids (already dismissed) are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_VISIBLE_TOASTS, ToastKind, ToastQueue};

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "saved");
        let second = queue.push(ToastKind::Error, "failed");

        assert!(second > first);
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["saved", "failed"]);
    }

    #[test]
    fn oldest_toasts_are_dropped_past_the_cap() {
        let mut queue = ToastQueue::default();
        for index in 0..(MAX_VISIBLE_TOASTS + 2) {
            queue.push(ToastKind::Info, format!("toast {index}"));
        }

        assert_eq!(queue.toasts().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.toasts()[0].message, "toast 2");
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Success, "done");

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Info, "a");
        queue.dismiss(id);
        let next = queue.push(ToastKind::Info, "b");

        assert_ne!(id, next);
    }
}
