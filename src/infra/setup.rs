use crate::{
    adapters::{http::app_state::AppState, persistence::activity::InMemoryActivityRepo},
    infra::{config::AppConfig, seed::load_catalog},
    use_cases::activity::{ActivityRepo, ActivityUseCases, CapacityPolicy},
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let catalog = load_catalog(config.seed_path.as_deref())?;
    let activity_repo = Arc::new(InMemoryActivityRepo::new(catalog)) as Arc<dyn ActivityRepo>;

    let activity_use_cases = ActivityUseCases::new(
        activity_repo,
        CapacityPolicy::from_flag(config.enforce_capacity),
    );

    Ok(AppState {
        config: Arc::new(config),
        activity_use_cases: Arc::new(activity_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "activities_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = log_file.and_then(|path| match File::create(path) {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(err) => {
            eprintln!("cannot create log file {}: {err}", path.display());
            None
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
