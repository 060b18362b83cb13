use std::{env, time::Duration};

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError, Extension, Router};
use coach_llm::{deepseek::DeepSeekConfig, CompletionClient};
use coach_service::{app_module::AppState, app_router::application_router};
use dotenvy::dotenv;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{fmt::format::FmtSpan, FmtSubscriber};

const PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let subscriber_builder = FmtSubscriber::builder()
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if env::var("APP_ENVIRONMENT").unwrap_or("dev".to_string()) == "dev" {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )
        .expect("setting dev subscriber failed");
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
        .expect("setting prod subscriber failed");
    }

    // TODO: refuse to start on an empty DEEPSEEK_API_KEY once deployments all
    // provide one; today the empty key is forwarded as an empty bearer token.
    let api_key = env::var("DEEPSEEK_API_KEY")
        .unwrap_or_default()
        .trim()
        .to_string();
    if api_key.is_empty() {
        tracing::warn!("DEEPSEEK_API_KEY is empty, upstream completion calls will be rejected");
    }

    let mut config = DeepSeekConfig::new(api_key);
    if let Ok(base_url) = env::var("DEEPSEEK_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let state = AppState::new(CompletionClient::new(config));

    let app = Router::new()
        .merge(application_router())
        .fallback_service(ServeDir::new("public"))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|error: BoxError| async move {
                    if error.is::<tower::timeout::error::Elapsed>() {
                        Ok(StatusCode::REQUEST_TIMEOUT)
                    } else {
                        Err((
                            StatusCode::INTERNAL_SERVER_ERROR,
                            format!("Unhandled internal error: {}", error),
                        ))
                    }
                }))
                .timeout(Duration::from_secs(120))
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state))
                .layer(
                    CorsLayer::new()
                        .allow_origin(tower_http::cors::Any)
                        .allow_methods(tower_http::cors::Any)
                        .allow_headers(tower_http::cors::Any),
                )
                .into_inner(),
        );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", PORT))
        .await
        .expect("unable to create listener");

    tracing::info!("Server started, listening on port {}", PORT);
    axum::serve(listener, app)
        .await
        .expect("unable to start server");
}
