use crate::app_lib::theme::{BadgeSize, BadgeVariant, badge_classes};
use leptos::prelude::*;

/// Small pill label in one of the fixed colour variants and sizes.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: BadgeSize,
    children: Children,
) -> impl IntoView {
    view! { <span class=badge_classes(variant, size)>{children()}</span> }
}
