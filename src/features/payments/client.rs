use crate::{
    app_lib::{AppError, get_json},
    features::payments::types::PaymentSummary,
};

/// Fetches the signed-in player's wallet history, newest first.
pub async fn recent_payments() -> Result<Vec<PaymentSummary>, AppError> {
    get_json("/me/payments").await
}
