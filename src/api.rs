use crate::{
    error::BreachError, response::GenericResponse, services::BreachService, state::AppState,
    validation,
};
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::Value;

async fn health_checker_handler() -> Json<GenericResponse> {
    const MESSAGE: &str = "Data breach lookup proxy";

    Json(GenericResponse {
        status: "success".to_string(),
        message: MESSAGE.to_string(),
    })
}

async fn check_breach_handler(
    State(data): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        // No JSON content type means no fields at all
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected breach check body");
            return BreachError::MalformedBody(rejection.body_text()).into_response();
        }
    };

    let query = match validation::validate(&body) {
        Ok(query) => query,
        Err(error) => {
            tracing::debug!(%error, "Invalid breach check request");
            return BreachError::from(error).into_response();
        }
    };

    let service = BreachService::new(&data);

    match service.check(&query).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/healthchecker", get(health_checker_handler))
        .route("/api/breaches/check", post(check_breach_handler))
}
