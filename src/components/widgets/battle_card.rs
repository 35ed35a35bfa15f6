use crate::app_lib::theme::BadgeSize;
use crate::components::{Badge, Card};
use crate::features::battles::types::BattleSummary;
use leptos::prelude::*;

/// One battle: both sides, the stake and the current status.
#[component]
pub fn BattleCard(battle: BattleSummary) -> impl IntoView {
    let status = battle.status;
    let outcome = battle.outcome();
    let opponent = battle.opponent_label().to_string();

    view! {
        <Card title=battle.game.clone()>
            <div class="flex items-center justify-between gap-4">
                <div class="flex items-center gap-3 text-sm font-medium text-gray-900 dark:text-white">
                    <span>{battle.challenger}</span>
                    <span class="text-xs uppercase text-gray-400">"vs"</span>
                    <span>{opponent}</span>
                </div>
                <Badge variant=status.badge_variant() size=BadgeSize::Sm>
                    {status.label()}
                </Badge>
            </div>
            <dl class="mt-4 grid grid-cols-2 gap-2 text-sm">
                <dt class="text-gray-500 dark:text-gray-400">"Stake"</dt>
                <dd class="text-right text-gray-900 dark:text-white">{battle.stake.to_string()}</dd>
                <dt class="text-gray-500 dark:text-gray-400">"Pot"</dt>
                <dd class="text-right text-gray-900 dark:text-white">{battle.pot().to_string()}</dd>
            </dl>
            {outcome.map(|line| view! {
                <p class="mt-3 text-sm font-medium text-gray-700 dark:text-gray-300">{line}</p>
            })}
        </Card>
    }
}
