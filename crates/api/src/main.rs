use std::sync::Arc;

#[tokio::main]
async fn main() {
    lendstock_observability::init();

    let addr = std::env::var("LENDSTOCK_ADDR").unwrap_or_else(|_| {
        tracing::warn!("LENDSTOCK_ADDR not set; using default 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let services = Arc::new(lendstock_api::app::services::build_services());
    let app = lendstock_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
