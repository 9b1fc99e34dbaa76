pub mod errors;
pub mod handlers;
pub mod models;
pub mod soap;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use errors::AppError;
pub use soap::SoapProxy;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::orders::submit_order, handlers::orders::health),
    components(schemas(
        models::order::SubmitOrderBody,
        models::order::OrderRequest,
        models::order::SubmitOrderResponse,
        models::order::OrderResponse,
    )),
    tags(
        (name = "pedidos", description = "REST gateway to the ACME SOAP order-dispatch service")
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    proxy: SoapProxy,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(proxy.clone()))
            // Malformed or missing JSON bodies answer with the same 400
            // shape as the field validations.
            .app_data(web::JsonConfig::default().error_handler(|_err, _req| {
                AppError::InvalidRequest("El cuerpo de la solicitud es inválido.".to_string())
                    .into()
            }))
            .wrap(Logger::default())
            .service(
                web::scope("/orders")
                    .route("/send", web::post().to(handlers::orders::submit_order))
                    .route("/health", web::get().to(handlers::orders::health)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
