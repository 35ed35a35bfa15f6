use crate::app_lib::theme::{BadgeSize, BadgeVariant};
use crate::components::{Badge, Card};
use crate::features::profile::types::ProfileSummary;
use leptos::prelude::*;

/// Player header: avatar, name, record and wallet balance.
#[component]
pub fn ProfileCard(profile: ProfileSummary) -> impl IntoView {
    let avatar = match profile.avatar() {
        Some(url) => view! {
            <img class="h-14 w-14 rounded-full object-cover" src=url.to_string() alt=profile.username.clone() />
        }
        .into_any(),
        None => view! {
            <div class="flex h-14 w-14 items-center justify-center rounded-full bg-blue-100 text-lg font-semibold text-blue-700 dark:bg-blue-900 dark:text-blue-200">
                {profile.initials()}
            </div>
        }
        .into_any(),
    };
    let win_rate = profile
        .win_rate_percent()
        .map_or_else(|| "No games yet".to_string(), |rate| format!("{rate}% win rate"));
    let record = format!("{}W / {}L", profile.wins, profile.losses);

    view! {
        <Card>
            <div class="flex items-center gap-4">
                {avatar}
                <div class="min-w-0 flex-1">
                    <p class="truncate text-lg font-semibold text-gray-900 dark:text-white">
                        {profile.username}
                    </p>
                    <div class="mt-1 flex items-center gap-2">
                        <Badge variant=BadgeVariant::Primary size=BadgeSize::Lg>{record}</Badge>
                        <span class="text-sm text-gray-500 dark:text-gray-400">{win_rate}</span>
                    </div>
                </div>
                <div class="text-right">
                    <p class="text-xs uppercase tracking-wide text-gray-400">"Balance"</p>
                    <p class="text-base font-semibold text-gray-900 dark:text-white">
                        {profile.balance.to_string()}
                    </p>
                </div>
            </div>
        </Card>
    }
}
