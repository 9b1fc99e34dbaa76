//! SOAP proxy towards the legacy order-dispatch service: envelope
//! construction, the outbound call, and reply normalization.

pub mod envelope;
pub mod response;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::models::order::{OrderRequest, OrderResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure talking to the dispatch service. The wrapped cause is for logs
/// only; clients get a generic message via `AppError`.
#[derive(Debug, Error)]
pub enum ExternalServiceError {
    #[error("could not reach the dispatch service: {0}")]
    Connectivity(#[source] reqwest::Error),

    #[error("dispatch service reply is not valid XML: {0}")]
    ParseFailure(#[source] quick_xml::Error),
}

/// Stateless client for the dispatch service. Cheap to clone; the inner
/// `reqwest::Client` pools connections and is reentrant.
#[derive(Clone)]
pub struct SoapProxy {
    client: reqwest::Client,
    endpoint: String,
}

impl SoapProxy {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build the outbound HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Sends one order to the dispatch service and normalizes its reply.
    ///
    /// Single attempt per request; timeouts and connection failures are
    /// `Connectivity` errors. A non-2xx status alone is not a failure: the
    /// mock upstream answers 200 with an empty body and sometimes non-200
    /// with a usable one, so the body is inspected either way.
    pub async fn send_order(
        &self,
        request: &OrderRequest,
    ) -> Result<OrderResponse, ExternalServiceError> {
        let soap_xml = envelope::build(request);
        log::debug!("Outgoing SOAP request:\n{}", soap_xml);

        let http_response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", envelope::SOAP_ACTION)
            .body(soap_xml)
            .send()
            .await
            .map_err(ExternalServiceError::Connectivity)?;

        let status = http_response.status();
        let body = http_response
            .text()
            .await
            .map_err(ExternalServiceError::Connectivity)?;
        log::debug!("SOAP response (HTTP {}):\n{}", status.as_u16(), body);

        if !status.is_success() {
            log::warn!(
                "Dispatch service answered HTTP {}; inspecting the body anyway",
                status.as_u16()
            );
        }

        response::parse(&body)
    }
}
