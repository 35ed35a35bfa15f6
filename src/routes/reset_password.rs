//! Password reset page reached from the emailed link
//! (`/reset-password?token=...`). The token is read once on mount and removed
//! from the address bar. Local validation runs before the single request; the
//! outcome is raised as a toast and a success redirects to `/login`.

use crate::app_lib::{
    location::clear_token_query,
    theme::{BadgeSize, BadgeVariant, ModalSize, Theme},
};
use crate::components::{
    Alert, AlertKind, AppShell, Badge, Button, Card, EmptyState, Modal, Spinner,
    ui::ButtonVariant, use_toasts,
};
use crate::features::auth::{
    client::HttpAuthClient,
    flow::{FlowStatus, ResetView, TokenFlow},
    password::{CredentialInput, MIN_PASSWORD_LENGTH, PasswordStrength, ResetSubmission},
    redirect::RouterRedirect,
    token::VerificationToken,
};
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

fn strength_badge(strength: PasswordStrength) -> BadgeVariant {
    match strength {
        PasswordStrength::Weak => BadgeVariant::Danger,
        PasswordStrength::Medium => BadgeVariant::Warning,
        PasswordStrength::Strong => BadgeVariant::Success,
    }
}

fn strength_bar(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Weak => "h-1.5 rounded-full bg-red-500",
        PasswordStrength::Medium => "h-1.5 rounded-full bg-yellow-400",
        PasswordStrength::Strong => "h-1.5 rounded-full bg-emerald-500",
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let token = VerificationToken::from_location();
    clear_token_query(paths::RESET_PASSWORD);
    let token = StoredValue::new(token);

    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (status, set_status) = signal(None::<FlowStatus>);
    let (tips_open, set_tips_open) = signal(false);

    let flow = TokenFlow::new(
        HttpAuthClient,
        use_toasts(),
        RouterRedirect::new(use_navigate()),
    );

    let action_flow = flow.clone();
    let reset_action = Action::new_local(move |submission: &ResetSubmission| {
        let flow = action_flow.clone();
        let submission = submission.clone();
        async move { flow.reset_password(&submission).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = reset_action.value().get() {
            set_status.set(Some(outcome));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if reset_action.pending().get_untracked() {
            return;
        }
        let input = CredentialInput {
            password: password.get_untracked(),
            confirmation: confirmation.get_untracked(),
        };
        let checked = token.with_value(|token| flow.check_reset(token.as_ref(), &input));
        if let Ok(submission) = checked {
            set_status.set(Some(FlowStatus::Pending));
            reset_action.dispatch(submission);
        }
    };

    let strength = Memo::new(move |_| password.with(|value| PasswordStrength::evaluate(value)));

    let strength_meter = move || {
        strength.get().map(|strength| {
            view! {
                <div class="mt-2 space-y-1">
                    <div class="h-1.5 w-full rounded-full bg-gray-200 dark:bg-gray-700">
                        <div
                            class=strength_bar(strength)
                            style=format!("width: {}%", strength.fill_percent())
                        ></div>
                    </div>
                    <Badge variant=strength_badge(strength) size=BadgeSize::Sm>
                        {strength.label()}
                    </Badge>
                </div>
            }
        })
    };

    let form = move || {
        let on_submit = on_submit.clone();
        view! {
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="new_password"
                    >
                        "New password"
                    </label>
                    <input
                        id="new_password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                        prop:value=password
                    />
                    {strength_meter}
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="confirm_password"
                    >
                        "Confirm password"
                    </label>
                    <input
                        id="confirm_password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        on:input=move |event| set_confirmation.set(event_target_value(&event))
                        prop:value=confirmation
                    />
                </div>
                <Button button_type="submit" disabled=reset_action.pending()>
                    "Reset password"
                </Button>
                <Button variant=ButtonVariant::Secondary on:click=move |_| set_tips_open.set(true)>
                    "Password tips"
                </Button>
            </form>
        }
    };

    let body = move || {
        let view_state = token.with_value(|token| {
            status.with(|status| ResetView::project(token.as_ref(), status.as_ref()))
        });
        match view_state {
            ResetView::MissingToken => view! {
                <EmptyState
                    icon="link_off"
                    title="Reset token not found"
                    description="This link is missing its reset token. Request a new link to continue."
                    action_label="Request a new link"
                    action_href=paths::FORGOT_PASSWORD
                />
            }
            .into_any(),
            ResetView::Form => form().into_any(),
            ResetView::Pending => view! { <Spinner label="Resetting password" /> }.into_any(),
            ResetView::Success(message) => view! {
                <div class="space-y-3">
                    <Alert kind=AlertKind::Success message=message />
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Redirecting you to sign in..."
                    </p>
                </div>
            }
            .into_any(),
            ResetView::Error(message) => view! {
                <div class="space-y-3">
                    <Alert kind=AlertKind::Error message=message />
                    <A
                        href=paths::FORGOT_PASSWORD
                        {..}
                        class="text-sm font-medium text-blue-700 hover:underline dark:text-blue-500"
                    >
                        "Request a new reset link"
                    </A>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <AppShell>
            <div class="max-w-md mx-auto">
                <Card title="Choose a new password">
                    {body}
                </Card>
            </div>
            <Modal
                open=tips_open
                on_close=Callback::new(move |_| set_tips_open.set(false))
                title="Password tips"
                size=ModalSize::Sm
            >
                <ul class="list-disc space-y-1 pl-5 text-sm text-gray-600 dark:text-gray-300">
                    <li>{format!("Use at least {MIN_PASSWORD_LENGTH} characters.")}</li>
                    <li>"Ten or more characters with an uppercase letter and a digit rate strong."</li>
                    <li>"Avoid passwords you use on other sites."</li>
                </ul>
            </Modal>
        </AppShell>
    }
}
