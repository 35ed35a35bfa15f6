use crate::components::{AppShell, Card, RequestLinkForm};
use crate::features::auth::recovery::LinkKind;
use leptos::prelude::*;

/// Starts a password reset by emailing a link to `/reset-password`.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-md mx-auto">
                <Card
                    title="Forgot your password?"
                    subtitle="Enter the email on your account and we will send a reset link."
                >
                    <RequestLinkForm kind=LinkKind::PasswordReset />
                </Card>
            </div>
        </AppShell>
    }
}
