//! Shared UI components exported for routes and features. Plain data pieces
//! (`overlay`, `toasts`) build everywhere; the Leptos views are browser-only.

#[cfg(target_arch = "wasm32")]
pub(crate) mod layout;
pub(crate) mod overlay;
#[cfg(target_arch = "wasm32")]
pub(crate) mod request_link;
pub(crate) mod toasts;
#[cfg(target_arch = "wasm32")]
pub(crate) mod ui;
#[cfg(target_arch = "wasm32")]
pub(crate) mod widgets;

#[cfg(target_arch = "wasm32")]
pub(crate) use layout::AppShell;
#[cfg(target_arch = "wasm32")]
pub(crate) use request_link::RequestLinkForm;
#[cfg(target_arch = "wasm32")]
pub(crate) use ui::{
    Alert, AlertKind, Badge, Button, Card, EmptyState, Modal, Skeleton, Spinner, use_toasts,
};
