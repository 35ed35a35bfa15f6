use crate::app_lib::theme::BadgeVariant;
use crate::features::payments::types::Money;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl BattleStatus {
    pub fn label(self) -> &'static str {
        match self {
            BattleStatus::Pending => "Waiting for opponent",
            BattleStatus::Active => "In progress",
            BattleStatus::Completed => "Completed",
            BattleStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            BattleStatus::Pending => BadgeVariant::Warning,
            BattleStatus::Active => BadgeVariant::Primary,
            BattleStatus::Completed => BadgeVariant::Success,
            BattleStatus::Cancelled => BadgeVariant::Secondary,
        }
    }
}

/// A head-to-head battle as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub id: String,
    pub game: String,
    pub challenger: String,
    pub opponent: Option<String>,
    /// Stake put up by each side.
    pub stake: Money,
    pub status: BattleStatus,
    #[serde(default)]
    pub winner: Option<String>,
}

impl BattleSummary {
    /// Opponent name, or a placeholder while the battle is open.
    pub fn opponent_label(&self) -> &str {
        self.opponent.as_deref().unwrap_or("Open slot")
    }

    /// Total paid to the winner: both stakes.
    pub fn pot(&self) -> Money {
        Money::new(
            self.stake.amount_minor.saturating_mul(2),
            self.stake.currency.clone(),
        )
    }

    /// Result line for finished battles.
    pub fn outcome(&self) -> Option<String> {
        match (self.status, self.winner.as_deref()) {
            (BattleStatus::Completed, Some(winner)) => Some(format!("{winner} won {}", self.pot())),
            (BattleStatus::Completed, None) => Some("Draw, stakes returned".to_string()),
            (BattleStatus::Cancelled, _) => Some("Stakes refunded".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BattleStatus, BattleSummary};
    use crate::features::payments::types::Money;

    fn battle(status: BattleStatus, winner: Option<&str>) -> BattleSummary {
        BattleSummary {
            id: "b_1".to_string(),
            game: "Chess blitz".to_string(),
            challenger: "alice".to_string(),
            opponent: Some("bob".to_string()),
            stake: Money::new(500, "USD"),
            status,
            winner: winner.map(str::to_string),
        }
    }

    #[test]
    fn outcome_only_for_finished_battles() {
        assert_eq!(battle(BattleStatus::Active, None).outcome(), None);
        assert_eq!(battle(BattleStatus::Pending, None).outcome(), None);
        assert_eq!(
            battle(BattleStatus::Completed, Some("alice")).outcome().as_deref(),
            Some("alice won 10.00 USD")
        );
        assert_eq!(
            battle(BattleStatus::Completed, None).outcome().as_deref(),
            Some("Draw, stakes returned")
        );
        assert_eq!(
            battle(BattleStatus::Cancelled, None).outcome().as_deref(),
            Some("Stakes refunded")
        );
    }

    #[test]
    fn open_battle_shows_placeholder_opponent() {
        let mut open = battle(BattleStatus::Pending, None);
        open.opponent = None;
        assert_eq!(open.opponent_label(), "Open slot");
        assert_eq!(battle(BattleStatus::Active, None).opponent_label(), "bob");
    }

    #[test]
    fn battle_deserializes_without_winner() {
        let json = r#"{
            "id": "b_2",
            "game": "Trivia",
            "challenger": "carol",
            "opponent": null,
            "stake": {"amount_minor": 250, "currency": "EUR"},
            "status": "pending"
        }"#;
        let parsed: BattleSummary = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(parsed.status, BattleStatus::Pending);
        assert_eq!(parsed.winner, None);
        assert_eq!(parsed.pot().to_string(), "5.00 EUR");
    }
}
