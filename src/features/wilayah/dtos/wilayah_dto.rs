use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `GET /`: each lookup route mapped to its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteIndexDto {
    #[serde(rename = "/{nama_wilayah}")]
    pub by_name: String,
    #[serde(rename = "/adm2/{nama_wilayah}")]
    pub adm2_by_name: String,
    #[serde(rename = "/kode/{kode_wilayah}")]
    pub name_by_code: String,
}

impl Default for RouteIndexDto {
    fn default() -> Self {
        Self {
            by_name: "mendapatkan kode wilayah (Kecamatan & Desa)".to_string(),
            adm2_by_name: "mendapatkan kode wilayah (Provinsi & Kabupaten)".to_string(),
            name_by_code: "mendapatkan nama wilayah (Kecamatan & Desa)".to_string(),
        }
    }
}
