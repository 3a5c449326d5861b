//! HTTP transport layer.
//!
//! Routes the `/mcp` JSON-RPC endpoint, the plain `/api/*` endpoints, and
//! the static-site fallback.

pub mod handlers;
pub mod static_files;
