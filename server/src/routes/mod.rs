//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the Leptos SSR app, its `/pkg` bundle, a health
//! probe, and permanent redirects for URLs the old marketing site used.
//! Anything else is tried against `SITE_DIR` and, failing that, rendered by
//! the app's not-found route so the 404 page matches the rest of the site.

pub mod health;
pub mod redirects;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::{any, get};
use client::config::SiteConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Health probe and legacy redirects; no Leptos involvement.
fn base_routes() -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/signin", get(redirects::to_login))
        .route("/sign-in", get(redirects::to_login))
        .route("/host", get(redirects::to_become_host))
        .route("/list-your-property", get(redirects::to_become_host))
        .route("/privacy-policy", get(redirects::to_privacy))
        .route("/terms-of-service", get(redirects::to_terms))
        .route("/case-study/{slug}", get(redirects::to_case_study))
}

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` / `LEPTOS_*` environment).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let site = config.site.clone();
            move || client::app::shell(opts.clone(), site.clone())
        })
        .with_state(leptos_options.clone());

    let not_found = any(render_not_found).with_state(ShellState {
        options: leptos_options.clone(),
        site: config.site.clone(),
    });
    let static_files = ServeDir::new(&config.site_dir).fallback(not_found);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// What the HTML shell needs outside the Leptos route table.
#[derive(Clone)]
struct ShellState {
    options: LeptosOptions,
    site: SiteConfig,
}

/// Render the app for an unrouted path; its fallback route sets the 404.
async fn render_not_found(State(shell): State<ShellState>, req: Request) -> Response {
    tracing::debug!(path = %req.uri().path(), "no route or static file");
    let render = leptos_axum::render_app_to_stream(move || {
        client::app::shell(shell.options.clone(), shell.site.clone())
    });
    render(req).await
}
