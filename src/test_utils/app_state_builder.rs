//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` backed by the in-memory activity
//! store, without reading the environment.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::http::HeaderValue;

use crate::{
    adapters::{http::app_state::AppState, persistence::activity::InMemoryActivityRepo},
    domain::entities::activity::{Activity, ActivityCatalog},
    infra::config::AppConfig,
    test_utils::create_test_catalog,
    use_cases::activity::{ActivityUseCases, CapacityPolicy},
};

/// Builder for creating `AppState` for tests.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_activity("Tiny Club", create_test_activity(|a| a.max_participants = 1))
///     .with_enforced_capacity()
///     .build();
/// ```
pub struct TestAppStateBuilder {
    catalog: ActivityCatalog,
    capacity: CapacityPolicy,
    static_dir: PathBuf,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    /// Starts from the default seed catalogue with capacity unenforced.
    pub fn new() -> Self {
        Self {
            catalog: create_test_catalog(),
            capacity: CapacityPolicy::Unenforced,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Replace the whole catalogue.
    pub fn with_catalog(mut self, catalog: ActivityCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Add or replace a single activity.
    pub fn with_activity(mut self, name: &str, activity: Activity) -> Self {
        self.catalog.insert(name.to_string(), activity);
        self
    }

    pub fn with_enforced_capacity(mut self) -> Self {
        self.capacity = CapacityPolicy::Enforced;
        self
    }

    pub fn with_static_dir(mut self, dir: &Path) -> Self {
        self.static_dir = dir.to_path_buf();
        self
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            cors_origin: HeaderValue::from_static("http://localhost:8000"),
            static_dir: self.static_dir,
            seed_path: None,
            enforce_capacity: self.capacity == CapacityPolicy::Enforced,
            log_file: None,
        };

        let repo = Arc::new(InMemoryActivityRepo::new(self.catalog));
        let activity_use_cases = ActivityUseCases::new(repo, self.capacity);

        AppState {
            config: Arc::new(config),
            activity_use_cases: Arc::new(activity_use_cases),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_activity;

    #[tokio::test]
    async fn test_with_catalog_replaces_seed() {
        let mut catalog = ActivityCatalog::new();
        catalog.insert("Solo".to_string(), create_test_activity(|_| {}));

        let app_state = TestAppStateBuilder::new().with_catalog(catalog).build();

        let listed = app_state.activity_use_cases.list_activities().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed.contains_key("Solo"));
    }

    #[test]
    fn test_enforced_capacity_reflected_in_config() {
        let app_state = TestAppStateBuilder::new().with_enforced_capacity().build();
        assert!(app_state.config.enforce_capacity);
    }
}
