mod config;
mod handlers;
mod routes;
mod state;
mod templates;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use policy_service_cli::ai::OpenRouterClient;
use policy_service_cli::breach::BreachClient;

use config::Config;
use routes::privacy::privacy_routes;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    let model = OpenRouterClient::new(config.openrouter_api_key.clone(), config.model.clone())
        .expect("failed to build model client");
    let breach =
        BreachClient::new(config.breach_api_key.clone()).expect("failed to build breach client");
    let state = AppState::new(Arc::new(model), breach);

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .client_url
                .parse::<HeaderValue>()
                .expect("CLIENT_URL must be a valid origin"),
        )
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = privacy_routes(state).layer(cors);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listener");
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await.expect("server error");
}
