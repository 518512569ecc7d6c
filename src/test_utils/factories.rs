//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use crate::domain::entities::activity::{Activity, ActivityCatalog, default_catalog};

/// Create a test activity with sensible defaults.
pub fn create_test_activity(overrides: impl FnOnce(&mut Activity)) -> Activity {
    let mut activity = Activity {
        description: "A test activity".to_string(),
        schedule: "Mondays, 3:30 PM - 4:30 PM".to_string(),
        max_participants: 10,
        participants: vec!["student@mergington.edu".to_string()],
    };
    overrides(&mut activity);
    activity
}

/// The catalogue the service starts with, so tests see the same seed as production.
pub fn create_test_catalog() -> ActivityCatalog {
    default_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let activity = create_test_activity(|a| a.max_participants = 3);
        assert_eq!(activity.max_participants, 3);
        assert_eq!(activity.participants.len(), 1);
    }
}
