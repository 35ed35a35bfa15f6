//! Player dashboard: profile header, recent battles and wallet activity. Each
//! section loads independently so one failing endpoint does not blank the page.

use crate::app_lib::theme::{ModalSize, SkeletonShape};
use crate::components::{
    Alert, AlertKind, AppShell, Button, EmptyState, Modal, Skeleton,
    ui::ButtonVariant,
    widgets::{BattleCard, PaymentCard, ProfileCard},
};
use crate::features::payments::types::PaymentSummary;
use crate::features::{
    battles::client::recent_battles, payments::client::recent_payments,
    profile::client::my_profile,
};
use crate::routes::paths;
use leptos::prelude::*;

/// Payments listed inline; the rest open in the history dialog.
const INLINE_PAYMENTS: usize = 5;

#[component]
fn SectionHeading(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
    }
}

#[component]
fn ProfileSkeleton() -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-5">
            <Skeleton shape=SkeletonShape::Circle />
            <div class="flex-1">
                <Skeleton shape={SkeletonShape::Text { lines: 2 }} />
            </div>
        </div>
    }
}

#[component]
fn PaymentList(payments: Vec<PaymentSummary>) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <For
                each=move || payments.clone()
                key=|payment| payment.id.clone()
                children=|payment| view! { <PaymentCard payment=payment /> }
            />
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let profile = LocalResource::new(move || async move { my_profile().await });
    let battles = LocalResource::new(move || async move { recent_battles().await });
    let payments = LocalResource::new(move || async move { recent_payments().await });
    let (history_open, set_history_open) = signal(false);

    view! {
        <AppShell>
            <div class="space-y-8">
                <Suspense fallback=move || view! { <ProfileSkeleton /> }>
                    {move || match profile.get() {
                        Some(Ok(profile)) => view! { <ProfileCard profile=profile /> }.into_any(),
                        Some(Err(err)) => {
                            tracing::warn!(error = %err, "profile load failed");
                            view! {
                                <EmptyState
                                    icon="person_off"
                                    title="You are not signed in"
                                    description="Sign in to see your profile, battles and wallet."
                                    action_label="Sign In"
                                    action_href=paths::LOGIN
                                />
                            }
                            .into_any()
                        }
                        None => view! { <ProfileSkeleton /> }.into_any(),
                    }}
                </Suspense>

                <section class="space-y-4">
                    <SectionHeading title="Recent battles" />
                    <Suspense fallback=move || view! { <Skeleton shape=SkeletonShape::Rect /> }>
                        {move || match battles.get() {
                            Some(Ok(list)) if list.is_empty() => view! {
                                <EmptyState
                                    icon="swords"
                                    title="No battles yet"
                                    description="Challenges you send or accept show up here."
                                />
                            }
                            .into_any(),
                            Some(Ok(list)) => view! {
                                <div class="grid gap-4 md:grid-cols-2">
                                    <For
                                        each=move || list.clone()
                                        key=|battle| battle.id.clone()
                                        children=|battle| view! { <BattleCard battle=battle /> }
                                    />
                                </div>
                            }
                            .into_any(),
                            Some(Err(err)) => view! {
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            }
                            .into_any(),
                            None => view! { <Skeleton shape=SkeletonShape::Rect /> }.into_any(),
                        }}
                    </Suspense>
                </section>

                <section class="space-y-4">
                    <SectionHeading title="Wallet activity" />
                    <Suspense fallback=move || view! { <Skeleton /> }>
                        {move || match payments.get() {
                            Some(Ok(list)) if list.is_empty() => view! {
                                <EmptyState
                                    icon="account_balance_wallet"
                                    title="No payments yet"
                                    description="Deposits, stakes and payouts will be listed here."
                                />
                            }
                            .into_any(),
                            Some(Ok(list)) => {
                                let has_more = list.len() > INLINE_PAYMENTS;
                                let inline: Vec<PaymentSummary> =
                                    list.iter().take(INLINE_PAYMENTS).cloned().collect();
                                view! {
                                    <PaymentList payments=inline />
                                    {has_more.then(|| view! {
                                        <Button
                                            variant=ButtonVariant::Secondary
                                            on:click=move |_| set_history_open.set(true)
                                        >
                                            "View full history"
                                        </Button>
                                    })}
                                    <Modal
                                        open=history_open
                                        on_close=Callback::new(move |_| set_history_open.set(false))
                                        title="Wallet history"
                                        size=ModalSize::Lg
                                    >
                                        <PaymentList payments=list.clone() />
                                    </Modal>
                                }
                                .into_any()
                            }
                            Some(Err(err)) => view! {
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            }
                            .into_any(),
                            None => view! { <Skeleton /> }.into_any(),
                        }}
                    </Suspense>
                </section>
            </div>
        </AppShell>
    }
}
