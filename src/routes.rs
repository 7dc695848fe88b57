//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is plain HTML on disk. The client rewrites the address bar to
//! clean URLs (`/about`) after in-place navigation, so the server has to
//! resolve those back to files for reloads and shared links. The wasm bundle
//! is served under `/pkg`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::config::ServerConfig;

const INDEX_FILE: &str = "index.html";
const NOT_FOUND_FILE: &str = "404.html";

/// Static site root shared by the fallback handler.
#[derive(Debug)]
struct Site {
    root: PathBuf,
}

/// Health check, `/pkg`, and clean-URL resolution for everything else.
pub fn app(config: &ServerConfig) -> Router {
    let site = Arc::new(Site { root: config.site_dir.clone() });

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback(serve_site)
        .with_state(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Files that may answer a request path, in lookup order, relative to the
/// site root. `None` when the path tries to leave the root.
///
/// - `/` and `` → `index.html`
/// - `/blog/` → `blog/index.html`
/// - `/about` → `about.html`, then `about/index.html`
/// - `/css/site.css` → itself
pub fn candidate_files(path: &str) -> Option<Vec<String>> {
    let rel = path.trim_start_matches('/');
    if rel.split('/').any(|segment| segment == "..") {
        return None;
    }
    if rel.is_empty() {
        return Some(vec![INDEX_FILE.to_owned()]);
    }
    if rel.ends_with('/') {
        return Some(vec![format!("{rel}{INDEX_FILE}")]);
    }
    let last = rel.rsplit('/').next().unwrap_or(rel);
    if last.contains('.') {
        return Some(vec![rel.to_owned()]);
    }
    Some(vec![format!("{rel}.html"), format!("{rel}/{INDEX_FILE}")])
}

async fn serve_site(State(site): State<Arc<Site>>, request: Request) -> Response {
    let path = request.uri().path().to_owned();
    let Some(candidates) = candidate_files(&path) else {
        tracing::warn!(%path, "rejected path outside the site root");
        return StatusCode::BAD_REQUEST.into_response();
    };

    for rel in candidates {
        let file = site.root.join(&rel);
        if is_file(&file).await {
            return serve_file(&file, request, StatusCode::OK).await;
        }
    }

    let not_found = site.root.join(NOT_FOUND_FILE);
    if is_file(&not_found).await {
        return serve_file(&not_found, request, StatusCode::NOT_FOUND).await;
    }
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok_and(|meta| meta.is_file())
}

async fn serve_file(file: &Path, request: Request, status: StatusCode) -> Response {
    match ServeFile::new(file).try_call(request).await {
        Ok(response) => {
            let mut response = response.map(Body::new).into_response();
            if status != StatusCode::OK && response.status() == StatusCode::OK {
                *response.status_mut() = status;
            }
            response
        }
        Err(e) => {
            tracing::error!(file = %file.display(), error = %e, "failed to read site file");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
