mod alert;
mod badge;
mod button;
mod card;
mod empty_state;
mod modal;
mod skeleton;
mod spinner;
mod toast;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use badge::Badge;
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use card::Card;
pub(crate) use empty_state::EmptyState;
pub(crate) use modal::Modal;
pub(crate) use skeleton::Skeleton;
pub(crate) use spinner::Spinner;
pub(crate) use toast::{ToastProvider, ToastStack, use_toasts};
