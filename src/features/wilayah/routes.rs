use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::wilayah::handlers;
use crate::features::wilayah::services::WilayahService;

/// Create routes for the wilayah feature
///
/// Fixed paths (`/health`) take precedence over the `/{wilayah}` capture.
pub fn routes(service: Arc<WilayahService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/{wilayah}", get(handlers::get_kode_by_nama))
        .route("/adm2/{wilayah}", get(handlers::get_kode_adm2_by_nama))
        .route("/kode/{kode}", get(handlers::get_nama_by_kode))
        .with_state(service)
}
