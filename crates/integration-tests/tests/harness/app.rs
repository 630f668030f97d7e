//! Fixture service whose handlers fail in each way the adapters recognize

use std::sync::{Arc, LazyLock};

use api_error::prelude::*;
use api_error::server::{CapturedResponse, HostContext, ResponseSink, SchemaIssue};
use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Request, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{BoxError, Json, Router};
use http::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tower::ServiceBuilder;
use validator::Validate;

const NEW_USER_FIELDS: [&str; 2] = ["name", "email"];

pub static PAYMENT_REQUIRED: LazyLock<ErrorClass> = LazyLock::new(|| {
    create_handle_error(ErrorDescriptor {
        name: "PaymentRequiredError",
        status_code: StatusCode::PAYMENT_REQUIRED,
        default_type: "PAYMENT_REQUIRED",
        default_message: Some("Payment required"),
    })
});

#[derive(Clone)]
struct AppState {
    mapper: Arc<ErrorMapper>,
    filters: Arc<FilterRegistry>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
struct NewUser {
    #[validate(length(min = 1, message = "Name is required"))]
    name: String,
    #[validate(email(message = "Email is not valid"))]
    email: String,
}

/// Host that buffers what a filter writes, then becomes the axum response
struct BufferedHost {
    response: CapturedResponse,
}

impl HostContext for BufferedHost {
    fn response(&mut self) -> &mut dyn ResponseSink {
        &mut self.response
    }
}

pub fn router(config: &HandlerConfig) -> Router {
    let mapper = ErrorMapper::new(config);
    let state = AppState {
        filters: Arc::new(FilterRegistry::with_defaults(mapper.clone())),
        mapper: Arc::new(mapper),
    };

    let broken = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_error))
        .service(tower::service_fn(|_request: Request| async {
            Err::<Response, BoxError>(Box::new(ApiError::unauthorized(
                None,
                Some(UnauthorizedType::InvalidToken),
                None,
            )))
        }));

    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(show_user))
        .route("/disk", get(read_disk))
        .route("/payments", post(charge))
        .route("/filtered/{kind}", get(filtered))
        .route_service("/broken", broken)
        .with_state(state)
}

async fn show_user(Path(id): Path<u64>) -> Result<Json<Value>, ApiError> {
    if id == 1 {
        return Ok(Json(json!({"id": 1, "name": "Ada"})));
    }

    Err(NotFoundType::User.error(json!({"id": id}).as_object().cloned()))
}

async fn read_disk(State(state): State<AppState>) -> Result<Json<Value>, ErrorResponder> {
    let error = std::io::Error::other("disk full");

    Err(ErrorResponder::from(error).with_mapper(state.mapper))
}

async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ErrorResponder> {
    let respond = |error: ErrorResponder| error.with_mapper(Arc::clone(&state.mapper));

    let Json(body) = payload.map_err(|rejection| respond(rejection.into()))?;

    let unknown: Vec<String> = body
        .keys()
        .filter(|key| !NEW_USER_FIELDS.contains(&key.as_str()))
        .cloned()
        .collect();

    let mut issues = Vec::new();
    if !unknown.is_empty() {
        issues.push(SchemaIssue::UnrecognizedKeys { keys: unknown });
    }

    let user: NewUser = serde_json::from_value(Value::Object(body)).map_err(|e| respond(e.into()))?;
    if let Err(errors) = user.validate() {
        issues.extend(SchemaViolation::from(errors).into_issues());
    }

    if !issues.is_empty() {
        return Err(respond(SchemaViolation::new(issues).into()));
    }

    Ok((StatusCode::CREATED, Json(json!({"name": user.name, "email": user.email}))))
}

async fn charge() -> Result<Json<Value>, ApiError> {
    let details = json!({"plan": "pro"}).as_object().cloned().unwrap_or_default();

    Err(PAYMENT_REQUIRED.with_details(details))
}

async fn filtered(State(state): State<AppState>, Path(kind): Path<String>) -> Response {
    let error: BoxError = match kind.as_str() {
        "forbidden" => Box::new(ForbiddenType::Image.error(None)),
        _ => "filter fell through".into(),
    };

    let mut host = BufferedHost {
        response: CapturedResponse::new(),
    };
    state.filters.dispatch(&*error, &mut host);

    host.response.into_response()
}
