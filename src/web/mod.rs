mod api;
pub mod viewer;

use crate::frontend::app;
use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use leptos::{
    config::{LeptosOptions, get_configuration},
    prelude::provide_context,
};
use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list};
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// API routes, the Leptos pages, and a fallback that serves site files or
/// renders the app's not-found view.
pub fn router(state: Arc<AppState>, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(app::App);
    let page_state = state.clone();
    let fallback_state = state.clone();
    let shell_options = leptos_options.clone();

    api::routes()
        .with_state(state)
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(page_state.clone()),
            move || app::shell(shell_options.clone()),
        )
        .fallback(file_and_error_handler_with_context(
            move || provide_context(fallback_state.clone()),
            app::shell,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    // Leptos configuration
    let conf = get_configuration(Some("Cargo.toml")).context("Invalid Leptos configuration")?;
    let bind_addr = state.config.bind_addr.clone();
    let app = router(state, conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
