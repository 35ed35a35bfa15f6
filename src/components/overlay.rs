//! Page-wide side effects owned by open modals: the `Escape` key listener
//! and the scroll lock on `<body>`. Each open modal holds a [`ModalLease`].
//! The scroll lock is counted across all leases on a page: the first lease
//! saves the current overflow and locks, the last one to drop restores it,
//! whatever order the modals close in.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Overflow value applied to `<body>` while a modal is open.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Scroll-lock bookkeeping shared by every lease on one page.
#[derive(Debug, Default)]
pub struct ScrollLock {
    open: Cell<usize>,
    saved_overflow: RefCell<Option<String>>,
}

impl ScrollLock {
    /// Number of leases currently holding the lock.
    pub fn open_count(&self) -> usize {
        self.open.get()
    }
}

/// Page-level hooks a modal needs. The browser implementation is
/// [`BrowserDocument`]; tests use an in-memory host.
pub trait ModalHost {
    /// Handle that keeps a key listener alive until passed back.
    type Listener;

    /// Lock state shared by all hosts that point at the same page.
    fn scroll_lock(&self) -> Rc<ScrollLock>;

    /// Current inline `overflow` of `<body>`, `None` when unset.
    fn body_overflow(&self) -> Option<String>;

    /// Sets or clears (`None`) the inline `overflow` of `<body>`.
    fn set_body_overflow(&self, value: Option<&str>);

    /// Registers `on_escape` for `Escape` key presses anywhere on the page.
    fn listen_escape(&self, on_escape: Rc<dyn Fn()>) -> Self::Listener;

    /// Unregisters a listener returned by `listen_escape`.
    fn unlisten(&self, listener: Self::Listener);
}

/// Held while a modal is open; dropping it gives back its listener and its
/// share of the scroll lock.
pub struct ModalLease<H: ModalHost> {
    host: H,
    lock: Rc<ScrollLock>,
    listener: Option<H::Listener>,
}

impl<H: ModalHost> ModalLease<H> {
    pub fn acquire(host: H, on_escape: Rc<dyn Fn()>) -> Self {
        let lock = host.scroll_lock();
        if lock.open.get() == 0 {
            *lock.saved_overflow.borrow_mut() = host.body_overflow();
            host.set_body_overflow(Some(LOCKED_OVERFLOW));
        }
        lock.open.set(lock.open.get() + 1);
        let listener = host.listen_escape(on_escape);
        tracing::trace!(open = lock.open_count(), "modal lease acquired");

        Self {
            host,
            lock,
            listener: Some(listener),
        }
    }
}

impl<H: ModalHost> Drop for ModalLease<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
        }

        let open = self.lock.open.get().saturating_sub(1);
        self.lock.open.set(open);
        if open == 0 {
            let saved = self.lock.saved_overflow.borrow_mut().take();
            self.host.set_body_overflow(saved.as_deref());
        }
        tracing::trace!(open, "modal lease released");
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ModalHost, ScrollLock};
    use std::rc::Rc;
    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::KeyboardEvent;

    thread_local! {
        static SCROLL_LOCK: Rc<ScrollLock> = Rc::default();
    }

    /// `ModalHost` backed by the live `window` and `document`. Every operation
    /// is a no-op when either is unavailable.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserDocument;

    impl ModalHost for BrowserDocument {
        type Listener = Closure<dyn Fn(KeyboardEvent)>;

        fn scroll_lock(&self) -> Rc<ScrollLock> {
            SCROLL_LOCK.with(Rc::clone)
        }

        fn body_overflow(&self) -> Option<String> {
            let body = web_sys::window()?.document()?.body()?;
            let value = body.style().get_property_value("overflow").ok()?;
            (!value.is_empty()).then_some(value)
        }

        fn set_body_overflow(&self, value: Option<&str>) {
            let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            else {
                return;
            };
            let style = body.style();
            let result = match value {
                Some(value) => style.set_property("overflow", value),
                None => style.remove_property("overflow").map(|_| ()),
            };
            if result.is_err() {
                tracing::warn!("unable to update body overflow");
            }
        }

        fn listen_escape(&self, on_escape: Rc<dyn Fn()>) -> Self::Listener {
            let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape();
                }
            });
            let registered = web_sys::window().is_some_and(|window| {
                window
                    .add_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    )
                    .is_ok()
            });
            if !registered {
                tracing::warn!("unable to register the modal escape listener");
            }
            listener
        }

        fn unlisten(&self, listener: Self::Listener) {
            let removed = web_sys::window().is_some_and(|window| {
                window
                    .remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    )
                    .is_ok()
            });
            if !removed {
                tracing::warn!("unable to remove the modal escape listener");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LOCKED_OVERFLOW, ModalHost, ModalLease, ScrollLock};
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct Page {
        overflow: RefCell<Option<String>>,
        listeners: RefCell<BTreeMap<u32, Rc<dyn Fn()>>>,
        next_id: Cell<u32>,
        lock: Rc<ScrollLock>,
    }

    impl Page {
        fn press_escape(&self) {
            let listeners: Vec<Rc<dyn Fn()>> = self.listeners.borrow().values().cloned().collect();
            for listener in listeners {
                listener();
            }
        }

        fn snapshot(&self) -> (Option<String>, usize) {
            (self.overflow.borrow().clone(), self.listeners.borrow().len())
        }
    }

    #[derive(Clone, Default)]
    struct FakeHost(Rc<Page>);

    impl ModalHost for FakeHost {
        type Listener = u32;

        fn scroll_lock(&self) -> Rc<ScrollLock> {
            Rc::clone(&self.0.lock)
        }

        fn body_overflow(&self) -> Option<String> {
            self.0.overflow.borrow().clone()
        }

        fn set_body_overflow(&self, value: Option<&str>) {
            *self.0.overflow.borrow_mut() = value.map(str::to_string);
        }

        fn listen_escape(&self, on_escape: Rc<dyn Fn()>) -> u32 {
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            self.0.listeners.borrow_mut().insert(id, on_escape);
            id
        }

        fn unlisten(&self, listener: u32) {
            self.0.listeners.borrow_mut().remove(&listener);
        }
    }

    fn noop() -> Rc<dyn Fn()> {
        Rc::new(|| {})
    }

    #[test]
    fn open_locks_scroll_and_listens() {
        let host = FakeHost::default();
        let lease = ModalLease::acquire(host.clone(), noop());

        assert_eq!(host.0.snapshot(), (Some(LOCKED_OVERFLOW.to_string()), 1));
        drop(lease);
        assert_eq!(host.0.snapshot(), (None, 0));
    }

    #[test]
    fn close_restores_previous_overflow() {
        let host = FakeHost::default();
        host.set_body_overflow(Some("scroll"));

        drop(ModalLease::acquire(host.clone(), noop()));

        assert_eq!(host.0.snapshot(), (Some("scroll".to_string()), 0));
    }

    #[test]
    fn repeated_cycles_do_not_leak() {
        let host = FakeHost::default();
        host.set_body_overflow(Some("auto"));
        let before = host.0.snapshot();

        for _ in 0..50 {
            let lease = ModalLease::acquire(host.clone(), noop());
            assert_eq!(host.0.listeners.borrow().len(), 1);
            drop(lease);
            assert_eq!(host.0.snapshot(), before);
        }
    }

    #[test]
    fn nested_modals_release_in_order() {
        let host = FakeHost::default();
        let outer = ModalLease::acquire(host.clone(), noop());
        let inner = ModalLease::acquire(host.clone(), noop());
        assert_eq!(host.0.snapshot(), (Some(LOCKED_OVERFLOW.to_string()), 2));

        drop(inner);
        assert_eq!(host.0.snapshot(), (Some(LOCKED_OVERFLOW.to_string()), 1));
        drop(outer);
        assert_eq!(host.0.snapshot(), (None, 0));
    }

    #[test]
    fn modals_closed_in_opening_order_restore_scroll() {
        let host = FakeHost::default();
        let first = ModalLease::acquire(host.clone(), noop());
        let second = ModalLease::acquire(host.clone(), noop());

        drop(first);
        assert_eq!(host.0.snapshot(), (Some(LOCKED_OVERFLOW.to_string()), 1));
        drop(second);
        assert_eq!(host.0.snapshot(), (None, 0));
        assert_eq!(host.0.lock.open_count(), 0);
    }

    #[test]
    fn interleaved_modals_keep_the_original_overflow() {
        let host = FakeHost::default();
        host.set_body_overflow(Some("auto"));

        let first = ModalLease::acquire(host.clone(), noop());
        let second = ModalLease::acquire(host.clone(), noop());
        drop(first);
        let third = ModalLease::acquire(host.clone(), noop());
        drop(second);
        assert_eq!(host.body_overflow().as_deref(), Some(LOCKED_OVERFLOW));
        drop(third);

        assert_eq!(host.0.snapshot(), (Some("auto".to_string()), 0));
    }

    #[test]
    fn escape_reaches_the_open_modal_only_while_open() {
        let host = FakeHost::default();
        let closes = Rc::new(Cell::new(0));
        let counter = closes.clone();
        let on_escape: Rc<dyn Fn()> = Rc::new(move || counter.set(counter.get() + 1));
        let lease = ModalLease::acquire(host.clone(), on_escape);

        host.0.press_escape();
        assert_eq!(closes.get(), 1);

        drop(lease);
        host.0.press_escape();
        assert_eq!(closes.get(), 1);
    }
}
