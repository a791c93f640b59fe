#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use axum::Extension;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::config::Config;
use crate::quiz::QuizGenerator;
use crate::store::NoteStore;

mod api;
mod config;
mod graceful_shutdown;
mod notes;
mod pages;
mod quiz;
mod store;
#[cfg(test)]
mod tests;
mod time;

const DEFAULT_RUST_LOG: &str = "study_notes=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let app = setup_app(Config::from_env())?;

    let address = config::address()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its dependencies
///
/// # Errors
///
/// Will return `Err` if the generative model configuration is invalid
pub fn setup_app(config: Config) -> Result<Router> {
    let store = NoteStore::new();
    let generator = QuizGenerator::new(config.model.into_model()?);

    Ok(Router::new()
        .nest("/api", api::router())
        .merge(pages::router(&config.public_dir))
        .layer(Extension(store))
        .layer(Extension(generator))
        .layer(TraceLayer::new_for_http()))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(config::env_var_or_else("RUST_LOG", || {
            DEFAULT_RUST_LOG.to_string()
        })))
        .with(fmt::layer())
        .init();
}
