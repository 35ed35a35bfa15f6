use crate::app_lib::theme::SkeletonShape;
use leptos::prelude::*;

/// Pulsing placeholder shown while content loads.
#[component]
pub fn Skeleton(#[prop(optional)] shape: SkeletonShape) -> impl IntoView {
    let blocks = shape
        .block_classes()
        .into_iter()
        .map(|class| view! { <div class=class></div> })
        .collect_view();

    view! {
        <div class="space-y-2.5" aria-hidden="true">
            {blocks}
        </div>
    }
}
