use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::errors::CoachError;
use crate::models::request::ChatRequest;
use crate::models::response::{ErrorDetail, HealthStatus, ReadyStatus, ServiceInfo, SubjectList};
use crate::service::CoachService;
use crate::subjects;

const ENDPOINTS: &[&str] = &["/health", "/ready", "/api/subjects", "/api/chat"];

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
        docs: ENDPOINTS,
    })
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::ok())
}

pub async fn ready(service: Data<CoachService>) -> Result<HttpResponse, CoachError> {
    let gateway = service.gateway();
    if !gateway.is_available() {
        return Err(CoachError::ModelUnavailable(format!(
            "{} credential is not configured",
            gateway.provider()
        )));
    }

    Ok(HttpResponse::Ok().json(ReadyStatus {
        status: "ready".to_string(),
        provider: gateway.provider().to_string(),
    }))
}

pub async fn subjects() -> HttpResponse {
    HttpResponse::Ok().json(SubjectList {
        subjects: subjects::list_subjects(),
    })
}

pub async fn chat(
    service: Data<CoachService>,
    request: Json<ChatRequest>,
) -> Result<HttpResponse, CoachError> {
    log::debug!(
        "chat request: subject {:?}, {} history turns",
        request.subject,
        request.history.len()
    );

    match service.handle_chat(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            match &e {
                CoachError::Validation(msg) => log::info!("chat rejected: {msg}"),
                _ => log::error!("chat error: {:?}", e),
            }
            Err(e)
        }
    }
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorDetail {
        detail: "Not Found".to_string(),
    })
}

/// Malformed or non-JSON bodies share the validation path (422). Other
/// payload failures keep actix's status, such as 413 for oversized bodies,
/// and still answer with `detail`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::info!("chat rejected: {err}");
    match err {
        JsonPayloadError::Deserialize(_) | JsonPayloadError::ContentType => {
            CoachError::Validation(err.to_string()).into()
        }
        other => {
            let response = HttpResponse::build(other.status_code()).json(ErrorDetail {
                detail: other.to_string(),
            });
            InternalError::from_response(other, response).into()
        }
    }
}
