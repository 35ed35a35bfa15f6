use crate::{
    app_lib::{AppError, get_json},
    features::battles::types::BattleSummary,
};

/// Fetches the signed-in player's recent battles.
pub async fn recent_battles() -> Result<Vec<BattleSummary>, AppError> {
    get_json("/me/battles").await
}
