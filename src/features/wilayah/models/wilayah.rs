use sqlx::FromRow;

/// A row of the `wilayah` reference table.
///
/// `kode` is opaque (`"33"`, `"33.01"`, `"33.01.01.2001"`). `nama` is stored
/// uppercase for provinces and regencies and in mixed case for districts and
/// villages.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Wilayah {
    pub kode: String,
    pub nama: String,
}

impl Wilayah {
    #[allow(dead_code)]
    pub fn new(kode: impl Into<String>, nama: impl Into<String>) -> Self {
        Self {
            kode: kode.into(),
            nama: nama.into(),
        }
    }
}
