use std::sync::Arc;

use axum::extract::FromRef;

use crate::{infra::config::AppConfig, use_cases::activity::ActivityUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub activity_use_cases: Arc<ActivityUseCases>,
}

impl FromRef<AppState> for Arc<ActivityUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.activity_use_cases.clone()
    }
}
