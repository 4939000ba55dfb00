use utoipa::{Modify, OpenApi};

use crate::features::wilayah::{dtos as wilayah_dtos, handlers as wilayah_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        wilayah_handlers::index,
        wilayah_handlers::health_check,
        wilayah_handlers::get_kode_by_nama,
        wilayah_handlers::get_kode_adm2_by_nama,
        wilayah_handlers::get_nama_by_kode,
    ),
    components(
        schemas(
            ErrorBody,
            wilayah_dtos::RouteIndexDto,
        )
    ),
    tags(
        (name = "wilayah", description = "Indonesian administrative region code lookup"),
        (name = "health", description = "Service liveness"),
    ),
    info(
        title = "Kode Wilayah API",
        version = "0.1.0",
        description = "Pencarian kode dan nama wilayah administrasi Indonesia",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
