use actix_web::HttpResponse;
use thiserror::Error;

use crate::soap::ExternalServiceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Upstream(#[from] ExternalServiceError),
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg
            })),
            // Upstream detail is logged at the call site; clients only ever
            // see this generic message.
            AppError::Upstream(_) => HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Error al comunicarse con el servicio de envío. Intente más tarde."
            })),
        }
    }
}
