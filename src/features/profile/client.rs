use crate::{
    app_lib::{AppError, get_json},
    features::profile::types::ProfileSummary,
};

/// Fetches the signed-in player's profile.
pub async fn my_profile() -> Result<ProfileSummary, AppError> {
    get_json("/me/profile").await
}
