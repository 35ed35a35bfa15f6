//! Toast notifications. A provider owns the queue in context, `ToastStack`
//! renders it in a fixed corner, and every toast dismisses itself after
//! `TOAST_TIMEOUT_MS`. `Toasts` is also the `Notifier` used by the auth flows.

use crate::components::toasts::{TOAST_TIMEOUT_MS, ToastKind, ToastQueue};
use crate::components::ui::{Alert, AlertKind};
use crate::features::auth::flow::Notifier;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Toast queue shared through Leptos context.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Shows a toast and schedules its dismissal.
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        let Some(id) = self.queue.try_update(|queue| queue.push(kind, message)) else {
            return;
        };

        let queue = self.queue;
        Timeout::new(TOAST_TIMEOUT_MS, move || {
            queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|queue| queue.dismiss(id));
    }
}

impl Notifier for Toasts {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

/// Provides the toast queue to the component tree.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(Toasts::new());

    view! { {children()} }
}

/// Returns the toast context or a detached queue when no provider is mounted.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}

/// Renders the visible toasts, newest at the bottom.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex w-full max-w-sm flex-col gap-2">
            <For
                each=move || toasts.queue.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="relative shadow-lg">
                            <Alert kind=AlertKind::from(toast.kind) message=toast.message />
                            <button
                                type="button"
                                class="absolute right-2 top-2 text-gray-400 hover:text-gray-700 dark:hover:text-white"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <span class="material-symbols-outlined text-base">"close"</span>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
