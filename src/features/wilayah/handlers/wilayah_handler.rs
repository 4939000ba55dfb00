use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::features::wilayah::dtos::RouteIndexDto;
use crate::features::wilayah::models::LookupOutcome;
use crate::features::wilayah::services::WilayahService;
use crate::shared::types::ErrorBody;

/// List the available lookup routes
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Route descriptions", body = RouteIndexDto)
    ),
    tag = "wilayah"
)]
pub async fn index() -> Json<RouteIndexDto> {
    Json(RouteIndexDto::default())
}

/// Liveness probe; does not touch the database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running")
    ),
    tag = "health"
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the code of a district or village by its exact name
#[utoipa::path(
    get,
    path = "/{wilayah}",
    params(
        ("wilayah" = String, Path, description = "Nama kecamatan atau desa (case-sensitive)")
    ),
    responses(
        (status = 200, description = "Kode wilayah, or \"Data tidak ditemukan\"", body = String),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "wilayah"
)]
pub async fn get_kode_by_nama(
    State(service): State<Arc<WilayahService>>,
    Path(wilayah): Path<String>,
) -> LookupOutcome {
    service.resolve_by_name(&wilayah).await
}

/// Get the code of a province or regency by name (case-insensitive)
#[utoipa::path(
    get,
    path = "/adm2/{wilayah}",
    params(
        ("wilayah" = String, Path, description = "Nama provinsi atau kabupaten/kota")
    ),
    responses(
        (status = 200, description = "Kode wilayah, or \"Data tidak ditemukan\"", body = String),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "wilayah"
)]
pub async fn get_kode_adm2_by_nama(
    State(service): State<Arc<WilayahService>>,
    Path(wilayah): Path<String>,
) -> LookupOutcome {
    service.resolve_adm2_by_name(&wilayah).await
}

/// Get the name of a region by its code
#[utoipa::path(
    get,
    path = "/kode/{kode}",
    params(
        ("kode" = String, Path, description = "Kode wilayah (e.g. 33, 33.01, 33.01.01)")
    ),
    responses(
        (status = 200, description = "Nama wilayah, or \"Data tidak ditemukan\"", body = String),
        (status = 500, description = "Database failure", body = ErrorBody)
    ),
    tag = "wilayah"
)]
pub async fn get_nama_by_kode(
    State(service): State<Arc<WilayahService>>,
    Path(kode): Path<String>,
) -> LookupOutcome {
    service.resolve_name_by_code(&kode).await
}
