//! Email verification page reached from the emailed link
//! (`/verify-email?token=...`). Verification starts on mount without user
//! input and runs once per visit. On failure the page offers to resend the
//! verification email.

use crate::app_lib::{location::clear_token_query, theme::SkeletonShape};
use crate::components::{
    Alert, AlertKind, AppShell, Card, RequestLinkForm, Skeleton, Spinner, use_toasts,
};
use crate::features::auth::{
    client::HttpAuthClient,
    flow::{FlowStatus, TokenFlow},
    recovery::LinkKind,
    redirect::RouterRedirect,
    token::VerificationToken,
};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let (status, set_status) = signal(FlowStatus::Pending);

    let flow = TokenFlow::new(
        HttpAuthClient,
        use_toasts(),
        RouterRedirect::new(use_navigate()),
    );
    let verify_action = Action::new_local(move |token: &Option<VerificationToken>| {
        let flow = flow.clone();
        let token = token.clone();
        async move { flow.verify_email(token.as_ref()).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = verify_action.value().get() {
            set_status.set(outcome);
        }
    });

    Effect::new(move |ran: Option<()>| {
        if ran.is_some() {
            return;
        }
        let token = VerificationToken::from_location();
        clear_token_query(paths::VERIFY_EMAIL);
        verify_action.dispatch(token);
    });

    view! {
        <AppShell>
            <div class="max-w-md mx-auto">
                <Card title="Verify your email">
                    {move || match status.get() {
                        FlowStatus::Pending => view! {
                            <div class="space-y-4">
                                <Spinner label="Verifying your email" />
                                <Skeleton shape={SkeletonShape::Text { lines: 2 }} />
                            </div>
                        }
                        .into_any(),
                        FlowStatus::Success(message) => view! {
                            <div class="space-y-3">
                                <Alert kind=AlertKind::Success message=message />
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "Redirecting you to sign in..."
                                </p>
                            </div>
                        }
                        .into_any(),
                        FlowStatus::Error(message) => view! {
                            <div class="space-y-5">
                                <Alert kind=AlertKind::Error message=message />
                                <div class="border-t border-gray-200 pt-4 dark:border-gray-700">
                                    <p class="mb-3 text-sm text-gray-500 dark:text-gray-400">
                                        "Need a new link? Enter your email and we will send another."
                                    </p>
                                    <RequestLinkForm kind=LinkKind::EmailVerification />
                                </div>
                            </div>
                        }
                        .into_any(),
                    }}
                </Card>
            </div>
        </AppShell>
    }
}
