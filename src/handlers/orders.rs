use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::errors::AppError;
use crate::models::order::{SubmitOrderBody, SubmitOrderResponse};
use crate::soap::SoapProxy;

/// POST /orders/send
///
/// Submits an order to the legacy dispatch service, translating the JSON
/// body into a SOAP envelope and the XML reply back into JSON. Only
/// `numPedido` and `numDocumento` are required; every other field is
/// forwarded as-is.
#[utoipa::path(
    post,
    path = "/orders/send",
    request_body = SubmitOrderBody,
    responses(
        (status = 200, description = "Order dispatched", body = SubmitOrderResponse),
        (status = 400, description = "Missing body, numPedido or numDocumento"),
        (status = 502, description = "Dispatch service unreachable or returned invalid XML"),
    ),
    tag = "pedidos"
)]
pub async fn submit_order(
    proxy: web::Data<SoapProxy>,
    body: web::Json<SubmitOrderBody>,
) -> Result<HttpResponse, AppError> {
    let Some(request) = body.into_inner().enviar_pedido else {
        return Err(AppError::InvalidRequest(
            "El cuerpo de la solicitud es inválido.".to_string(),
        ));
    };

    if request.num_pedido.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "El campo numPedido es requerido.".to_string(),
        ));
    }
    if request.num_documento.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "El campo numDocumento es requerido.".to_string(),
        ));
    }

    log::info!(
        "Processing order {} for document {}",
        request.num_pedido,
        request.num_documento
    );

    let respuesta = proxy.send_order(&request).await.map_err(|e| {
        log::error!("SOAP dispatch call failed: {}", e);
        AppError::Upstream(e)
    })?;

    Ok(HttpResponse::Ok().json(SubmitOrderResponse {
        enviar_pedido_respuesta: respuesta,
    }))
}

/// GET /orders/health
///
/// Liveness probe; succeeds regardless of the dispatch service's state.
#[utoipa::path(
    get,
    path = "/orders/health",
    responses(
        (status = 200, description = "Service is alive"),
    ),
    tag = "pedidos"
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "OK", "timestamp": Utc::now() }))
}
