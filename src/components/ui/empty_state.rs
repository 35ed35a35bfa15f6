use crate::app_lib::theme::Theme;
use leptos::prelude::*;
use leptos_router::components::A;

/// Centered message for screens with nothing to show, with an optional link.
#[component]
pub fn EmptyState(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(optional, into)] action_href: Option<String>,
) -> impl IntoView {
    let action = action_label.zip(action_href).map(|(label, href)| {
        view! {
            <A
                href=href
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            >
                {label}
            </A>
        }
    });

    view! {
        <div class="flex flex-col items-center justify-center px-4 py-12 text-center">
            <span class=format!("{} text-5xl", Theme::ICON)>{icon}</span>
            <h2 class="mt-4 text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
            <p class="mt-2 max-w-sm text-sm text-gray-500 dark:text-gray-400">{description}</p>
            {action}
        </div>
    }
}
