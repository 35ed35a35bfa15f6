use crate::app_lib::theme::BadgeSize;
use crate::components::Badge;
use crate::features::payments::types::PaymentSummary;
use leptos::prelude::*;

/// One wallet movement as a list row.
#[component]
pub fn PaymentCard(payment: PaymentSummary) -> impl IntoView {
    let amount = payment.signed_amount();
    let amount_class = if amount.amount_minor < 0 {
        "text-sm font-semibold text-red-600 dark:text-red-400"
    } else {
        "text-sm font-semibold text-emerald-600 dark:text-emerald-400"
    };

    view! {
        <div class="flex items-center justify-between gap-4 rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
            <div class="min-w-0">
                <p class="text-sm font-medium text-gray-900 dark:text-white">
                    {payment.kind.label()}
                </p>
                <p class="truncate text-xs text-gray-500 dark:text-gray-400">
                    {payment.method} " · " {payment.created_at}
                </p>
            </div>
            <div class="flex flex-col items-end gap-1">
                <span class=amount_class>{amount.to_string()}</span>
                <Badge variant=payment.status.badge_variant() size=BadgeSize::Sm>
                    {payment.status.label()}
                </Badge>
            </div>
        </div>
    }
}
