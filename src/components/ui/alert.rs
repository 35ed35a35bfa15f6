//! Alert banners for success, error and informational messages. Messages must
//! be safe to render and should never include tokens or passwords.

use crate::components::toasts::ToastKind;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl From<ToastKind> for AlertKind {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Error => AlertKind::Error,
            ToastKind::Success => AlertKind::Success,
            ToastKind::Info => AlertKind::Info,
        }
    }
}

impl AlertKind {
    fn classes(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            }
            AlertKind::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
            }
            AlertKind::Info => {
                "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
            }
        }
    }

    /// Errors interrupt screen readers; everything else waits its turn.
    fn role(self) -> &'static str {
        match self {
            AlertKind::Error => "alert",
            AlertKind::Success | AlertKind::Info => "status",
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! { <div class=kind.classes() role=kind.role()>{message}</div> }
}
