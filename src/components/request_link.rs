//! Email form that asks the API for a fresh reset or verification link. It
//! validates the address locally and always shows the same neutral result so
//! the page does not reveal which emails have accounts.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, Spinner, toasts::ToastKind, use_toasts};
use crate::features::auth::{
    client,
    recovery::{LINK_SENT_MESSAGE, LinkKind, normalize_email},
    types::LinkRequest,
};
use leptos::{ev::SubmitEvent, prelude::*};

#[derive(Clone, Debug, PartialEq)]
enum RequestStatus {
    Idle,
    Sent,
    Error(String),
}

#[component]
pub fn RequestLinkForm(kind: LinkKind) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(RequestStatus::Idle);
    let toasts = use_toasts();

    let request_action = Action::new_local(move |email: &String| {
        let request = LinkRequest {
            email: email.clone(),
        };
        async move { client::request_link(kind, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(_) => {
                    toasts.push(ToastKind::Info, LINK_SENT_MESSAGE);
                    set_status.set(RequestStatus::Sent);
                }
                Err(err) => {
                    tracing::warn!(endpoint = kind.endpoint(), "link request failed");
                    set_status.set(RequestStatus::Error(
                        err.server_message()
                            .map_or_else(|| err.to_string(), str::to_string),
                    ));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match normalize_email(&email.get_untracked()) {
            Ok(email_value) => {
                set_status.set(RequestStatus::Idle);
                request_action.dispatch(email_value);
            }
            Err(err) => set_status.set(RequestStatus::Error(err.to_string())),
        }
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="link_email"
                >
                    "Email"
                </label>
                <input
                    id="link_email"
                    type="email"
                    class=Theme::INPUT
                    autocomplete="email"
                    placeholder="name@inbox.im"
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=request_action.pending()>
                {kind.submit_label()}
            </Button>
            {move || {
                request_action
                    .pending()
                    .get()
                    .then_some(view! { <Spinner label="Sending" /> })
            }}
            {move || match status.get() {
                RequestStatus::Idle => None,
                RequestStatus::Sent => Some(view! {
                    <Alert kind=AlertKind::Success message=LINK_SENT_MESSAGE />
                }.into_any()),
                RequestStatus::Error(message) => Some(view! {
                    <Alert kind=AlertKind::Error message=message />
                }.into_any()),
            }}
        </form>
    }
}
