use dotenvy::dotenv;
use pedidos_gateway::{build_server, SoapProxy};
use std::env;

/// Placeholder pointing at the Beeceptor mock; override via SOAP_ENDPOINT.
const DEFAULT_SOAP_ENDPOINT: &str = "https://smb2b095807450.free.beeceptor.com";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let endpoint =
        env::var("SOAP_ENDPOINT").unwrap_or_else(|_| DEFAULT_SOAP_ENDPOINT.to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");

    log::info!(
        "Starting server at http://{}:{} (dispatch endpoint: {})",
        host,
        port,
        endpoint
    );

    build_server(SoapProxy::new(endpoint), &host, port)?.await
}
