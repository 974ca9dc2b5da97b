//! UpdateProfileHandler - Overwrites height and goal weight.
//!
//! Both values are sent every time; `None` clears the stored value.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, UserId};
use crate::domain::user::{BodyMetrics, User, UserError};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub height_cm: Option<f64>,
    pub goal_weight_kg: Option<f64>,
}

pub struct UpdateProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Returns the user as stored after the update.
    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<User, UserError> {
        let metrics = BodyMetrics::new(cmd.height_cm, cmd.goal_weight_kg)?;

        self.users
            .update_metrics(&cmd.user_id, &metrics)
            .await
            .map_err(|e| match e.code {
                ErrorCode::UserNotFound => UserError::NotFound(cmd.user_id),
                _ => UserError::from(e),
            })?;

        let user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or(UserError::NotFound(cmd.user_id))?;

        tracing::info!(
            user_id = %cmd.user_id,
            height_cm = ?metrics.height_cm,
            goal_weight_kg = ?metrics.goal_weight_kg,
            "profile_updated"
        );
        Ok(user)
    }
}
