//! Display widgets for battles, payments and player profiles. Each is a pure
//! mapping from a feature type to markup.

mod battle_card;
mod payment_card;
mod profile_card;

pub(crate) use battle_card::BattleCard;
pub(crate) use payment_card::PaymentCard;
pub(crate) use profile_card::ProfileCard;
