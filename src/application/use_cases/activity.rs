use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::activity::{Activity, ActivityCatalog},
};

/// Whether signups are rejected once an activity reaches `max_participants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Unenforced,
    Enforced,
}

impl CapacityPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Unenforced
        }
    }
}

/// Storage for the activity catalogue.
///
/// Implementations must perform the membership check and the mutation of
/// `add_participant` / `remove_participant` atomically.
#[async_trait]
pub trait ActivityRepo: Send + Sync {
    async fn list(&self) -> AppResult<ActivityCatalog>;
    /// Returns the activity after the email was appended.
    async fn add_participant(
        &self,
        name: &str,
        email: &str,
        capacity: CapacityPolicy,
    ) -> AppResult<Activity>;
    /// Returns the activity after the email was removed.
    async fn remove_participant(&self, name: &str, email: &str) -> AppResult<Activity>;
}

#[derive(Clone)]
pub struct ActivityUseCases {
    repo: Arc<dyn ActivityRepo>,
    capacity: CapacityPolicy,
}

impl ActivityUseCases {
    pub fn new(repo: Arc<dyn ActivityRepo>, capacity: CapacityPolicy) -> Self {
        Self { repo, capacity }
    }

    pub async fn list_activities(&self) -> AppResult<ActivityCatalog> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn signup(&self, activity_name: &str, email: &str) -> AppResult<Activity> {
        let email = normalize_email(email)?;
        let activity = self
            .repo
            .add_participant(activity_name, &email, self.capacity)
            .await?;

        info!(
            activity = activity_name,
            participants = activity.participants.len(),
            spots_left = activity.spots_left(),
            "Participant signed up"
        );
        Ok(activity)
    }

    #[instrument(skip(self))]
    pub async fn unregister(&self, activity_name: &str, email: &str) -> AppResult<Activity> {
        let email = normalize_email(email)?;
        let activity = self.repo.remove_participant(activity_name, &email).await?;

        info!(
            activity = activity_name,
            participants = activity.participants.len(),
            "Participant unregistered"
        );
        Ok(activity)
    }
}

/// Trims surrounding whitespace; an email that is empty afterwards is treated as missing.
pub fn normalize_email(email: &str) -> AppResult<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("email is required".into()));
    }
    Ok(trimmed.to_string())
}
