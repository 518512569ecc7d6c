use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::activity::{Activity, ActivityCatalog},
    use_cases::activity::{ActivityRepo, CapacityPolicy},
};

/// Process-local activity store. Contents are lost on restart.
pub struct InMemoryActivityRepo {
    activities: Mutex<ActivityCatalog>,
}

impl InMemoryActivityRepo {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            activities: Mutex::new(catalog),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, ActivityCatalog>> {
        self.activities
            .lock()
            .map_err(|_| AppError::Internal("activity store lock poisoned".into()))
    }
}

#[async_trait]
impl ActivityRepo for InMemoryActivityRepo {
    async fn list(&self) -> AppResult<ActivityCatalog> {
        Ok(self.lock()?.clone())
    }

    async fn add_participant(
        &self,
        name: &str,
        email: &str,
        capacity: CapacityPolicy,
    ) -> AppResult<Activity> {
        let mut activities = self.lock()?;
        let activity = activities.get_mut(name).ok_or(AppError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(AppError::AlreadySignedUp);
        }
        if capacity == CapacityPolicy::Enforced && activity.is_full() {
            return Err(AppError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    async fn remove_participant(&self, name: &str, email: &str) -> AppResult<Activity> {
        let mut activities = self.lock()?;
        let activity = activities.get_mut(name).ok_or(AppError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(AppError::NotSignedUp)?;
        activity.participants.remove(position);

        Ok(activity.clone())
    }
}
