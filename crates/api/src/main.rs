use std::sync::Arc;

use userdesk_directory::RestDirectory;

#[tokio::main]
async fn main() {
    userdesk_observability::init();

    let directory_url =
        std::env::var("DIRECTORY_URL").expect("DIRECTORY_URL must be set");
    let service_key =
        std::env::var("DIRECTORY_SERVICE_KEY").expect("DIRECTORY_SERVICE_KEY must be set");
    let admin_key =
        std::env::var("ADMIN_SECRET_KEY").expect("ADMIN_SECRET_KEY must be set");
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    tracing::debug!("directory endpoint: {directory_url}");

    let directory = Arc::new(RestDirectory::new(directory_url, service_key));
    let app = userdesk_api::app::build_app(admin_key, directory);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|e| panic!("failed to bind 0.0.0.0:{port}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
