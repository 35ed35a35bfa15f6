use crate::components::ui::{ToastProvider, ToastStack};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <Router>
                <AppRoutes />
            </Router>
            <ToastStack />
        </ToastProvider>
    }
}
