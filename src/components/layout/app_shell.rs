//! Shared layout wrapper with the product header and a centered content
//! column. Routes wrap their content in it so pages share the same chrome.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="border-b border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="flex items-center space-x-3 rtl:space-x-reverse">
                        <img src="/logo.svg" class="h-8" alt="Arena" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">"Arena"</span>
                    </A>
                    <A
                        href=paths::LOGIN
                        {..}
                        class="text-sm font-medium text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                    >
                        "Sign In"
                    </A>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
