use gazetteer_api::app::build_app;
use gazetteer_api::config::ApiConfig;

#[tokio::main]
async fn main() {
    gazetteer_observability::init();

    let config = ApiConfig::default();
    let addr = config.bind_addr;

    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
