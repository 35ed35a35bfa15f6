//! Payment history entries as returned by the wallet API, plus the money type
//! shared by every widget that shows an amount.

use crate::app_lib::theme::BadgeVariant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount in minor units (cents) with an ISO currency code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount_minor: i64,
    pub currency: String,
}

impl Money {
    pub fn new(amount_minor: i64, currency: impl Into<String>) -> Self {
        Self {
            amount_minor,
            currency: currency.into(),
        }
    }

    /// Same amount with the sign flipped; saturates at the `i64` bounds.
    pub fn negated(&self) -> Self {
        Self::new(self.amount_minor.saturating_neg(), self.currency.clone())
    }
}

impl fmt::Display for Money {
    /// Renders `-12.50 USD`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        write!(
            formatter,
            "{sign}{}.{:02} {}",
            abs / 100,
            abs % 100,
            self.currency.to_uppercase()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Deposit,
    Withdrawal,
    Stake,
    Payout,
}

impl PaymentKind {
    pub fn label(self) -> &'static str {
        match self {
            PaymentKind::Deposit => "Deposit",
            PaymentKind::Withdrawal => "Withdrawal",
            PaymentKind::Stake => "Battle stake",
            PaymentKind::Payout => "Battle payout",
        }
    }

    /// Whether money leaves the wallet.
    pub fn is_debit(self) -> bool {
        matches!(self, PaymentKind::Withdrawal | PaymentKind::Stake)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            PaymentStatus::Pending => BadgeVariant::Warning,
            PaymentStatus::Completed => BadgeVariant::Success,
            PaymentStatus::Failed => BadgeVariant::Danger,
            PaymentStatus::Refunded => BadgeVariant::Info,
        }
    }
}

/// One wallet movement. `amount` is always positive; the kind gives the sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub id: String,
    pub amount: Money,
    pub kind: PaymentKind,
    pub status: PaymentStatus,
    pub method: String,
    pub created_at: String,
}

impl PaymentSummary {
    /// Amount as seen from the wallet: negative for debits.
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_debit() {
            self.amount.negated()
        } else {
            self.amount.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Money, PaymentKind, PaymentStatus, PaymentSummary};
    use crate::app_lib::theme::BadgeVariant;

    fn payment(kind: PaymentKind, amount_minor: i64) -> PaymentSummary {
        PaymentSummary {
            id: "pay_1".to_string(),
            amount: Money::new(amount_minor, "usd"),
            kind,
            status: PaymentStatus::Completed,
            method: "Visa •••• 4242".to_string(),
            created_at: "2026-10-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn money_formats_two_decimals_and_sign() {
        assert_eq!(Money::new(1250, "usd").to_string(), "12.50 USD");
        assert_eq!(Money::new(-1250, "EUR").to_string(), "-12.50 EUR");
        assert_eq!(Money::new(5, "USD").to_string(), "0.05 USD");
        assert_eq!(Money::new(0, "USD").to_string(), "0.00 USD");
        assert_eq!(
            Money::new(i64::MIN, "USD").to_string(),
            "-92233720368547758.08 USD"
        );
    }

    #[test]
    fn debits_are_negative() {
        assert_eq!(payment(PaymentKind::Deposit, 500).signed_amount().amount_minor, 500);
        assert_eq!(payment(PaymentKind::Payout, 500).signed_amount().amount_minor, 500);
        assert_eq!(payment(PaymentKind::Stake, 500).signed_amount().amount_minor, -500);
        assert_eq!(
            payment(PaymentKind::Withdrawal, 500).signed_amount().to_string(),
            "-5.00 USD"
        );
    }

    #[test]
    fn status_badges() {
        assert_eq!(PaymentStatus::Pending.badge_variant(), BadgeVariant::Warning);
        assert_eq!(PaymentStatus::Failed.badge_variant(), BadgeVariant::Danger);
    }

    #[test]
    fn payment_deserializes_from_api_shape() {
        let json = r#"{
            "id": "pay_9",
            "amount": {"amount_minor": 2000, "currency": "USD"},
            "kind": "payout",
            "status": "refunded",
            "method": "Wallet",
            "created_at": "2026-10-02T08:30:00Z"
        }"#;
        let parsed: PaymentSummary = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(parsed.kind, PaymentKind::Payout);
        assert_eq!(parsed.status, PaymentStatus::Refunded);
        assert_eq!(parsed.signed_amount().to_string(), "20.00 USD");
    }
}
