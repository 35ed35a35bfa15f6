use crate::components::{AppShell, EmptyState};
use crate::routes::paths;
use leptos::prelude::*;

/// Landing target of the token flows after they succeed.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AppShell>
            <EmptyState
                icon="login"
                title="Sign in to Arena"
                description="Your account is ready. Sign in from the Arena app with your email and password."
                action_label="Forgot password?"
                action_href=paths::FORGOT_PASSWORD
            />
        </AppShell>
    }
}
