//! Static-site fallback handler.
//!
//! Resolution is confined to the configured site root: request paths are
//! rebuilt segment by segment and anything trying to step outside is
//! rejected before touching the filesystem. Directories resolve to their
//! `index.html`, and extension-less routes fall back to `<path>.html` so
//! `/join` serves `join.html`.

use std::path::{Path, PathBuf};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::AppState;

pub async fn serve_site(State(state): State<AppState>, uri: Uri) -> Response {
    let request_path = uri.path();
    let wanted = if request_path == "/" {
        "/index.html"
    } else {
        request_path
    };

    let Some(mut file_path) = resolve_site_path(&state.site_dir, wanted) else {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    if is_dir(&file_path).await {
        let index = file_path.join("index.html");
        if is_file(&index).await {
            file_path = index;
        }
    }

    if !is_file(&file_path).await && !wanted.ends_with('/') {
        if let Some(alt) = resolve_site_path(&state.site_dir, &format!("{wanted}.html")) {
            if is_file(&alt).await {
                file_path = alt;
            }
        }
    }

    if !is_file(&file_path).await {
        return not_found(&state.site_dir).await;
    }

    match tokio::fs::read(&file_path).await {
        Ok(body) => (
            [(header::CONTENT_TYPE, content_type_for(&file_path))],
            body,
        )
            .into_response(),
        Err(_) => not_found(&state.site_dir).await,
    }
}

async fn not_found(site_dir: &Path) -> Response {
    let page = site_dir.join("404.html");
    match tokio::fs::read(&page).await {
        Ok(body) => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Joins the request path onto the site root, rejecting any segment that
/// could escape it. Returns `None` for traversal attempts.
pub fn resolve_site_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for segment in request_path.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." || segment.contains('\\') || segment.contains('\0') {
            return None;
        }
        resolved.push(segment);
    }
    Some(resolved)
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("md") => "text/markdown; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
