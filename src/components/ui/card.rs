use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Surface with an optional header and footer.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(default = true)] padded: bool,
    children: Children,
) -> impl IntoView {
    let body_class = if padded { "p-5" } else { "" };
    let has_header = title.is_some() || subtitle.is_some();

    view! {
        <section class=Theme::SURFACE>
            {has_header.then(|| view! {
                <header class="border-b border-gray-200 px-5 py-4 dark:border-gray-700">
                    {title.map(|title| view! {
                        <h2 class="text-base font-semibold text-gray-900 dark:text-white">{title}</h2>
                    })}
                    {subtitle.map(|subtitle| view! {
                        <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
                    })}
                </header>
            })}
            <div class=body_class>{children()}</div>
            {footer.map(|footer| view! {
                <footer class="border-t border-gray-200 px-5 py-3 dark:border-gray-700">
                    {footer.run()}
                </footer>
            })}
        </section>
    }
}
