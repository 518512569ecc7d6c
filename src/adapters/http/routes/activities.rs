use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::activity::ActivityCatalog,
    use_cases::activity::ActivityUseCases,
};

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

impl EmailQuery {
    fn required(self) -> AppResult<String> {
        self.email.ok_or_else(|| AppError::InvalidInput("email is required".into()))
    }
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_activities))
        .route("/{name}/signup", post(signup))
        .route("/{name}/participants", delete(unregister))
}

async fn list_activities(
    State(activities): State<Arc<ActivityUseCases>>,
) -> AppResult<Json<ActivityCatalog>> {
    Ok(Json(activities.list_activities().await?))
}

async fn signup(
    State(activities): State<Arc<ActivityUseCases>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> AppResult<impl IntoResponse> {
    let email = query.required()?;
    activities.signup(&name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email.trim(), name),
    }))
}

async fn unregister(
    State(activities): State<Arc<ActivityUseCases>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> AppResult<impl IntoResponse> {
    let email = query.required()?;
    activities.unregister(&name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email.trim(), name),
    }))
}
