//! citrus-admin server: serves the console bundle and the project API.

mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("invalid PORT");

    let config = services::project::ProjectConfig::from_env()
        .expect("project configuration failed");
    tracing::info!(
        project_home = %config.project_home().display(),
        static_dir = %config.static_dir().display(),
        "project resolved"
    );

    let state = state::AppState::new(config);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "citrus-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
