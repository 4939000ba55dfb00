use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::wilayah::models::Wilayah;

/// Exact-match queries over the `wilayah` table.
///
/// Both methods return every matching row in the order the backend yields
/// them. No ordering is imposed.
#[async_trait]
pub trait WilayahRepository: Send + Sync {
    /// All records whose `nama` equals `nama` (case-sensitive).
    async fn find_by_nama(&self, nama: &str) -> Result<Vec<Wilayah>>;

    /// All records whose `kode` equals `kode`.
    async fn find_by_kode(&self, kode: &str) -> Result<Vec<Wilayah>>;
}

/// PostgreSQL-backed repository sharing the process-wide pool.
pub struct PgWilayahRepository {
    pool: PgPool,
}

impl PgWilayahRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WilayahRepository for PgWilayahRepository {
    async fn find_by_nama(&self, nama: &str) -> Result<Vec<Wilayah>> {
        sqlx::query_as::<_, Wilayah>(
            r#"
            SELECT kode, nama
            FROM wilayah
            WHERE nama = $1
            "#,
        )
        .bind(nama)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch wilayah by nama {}: {:?}", nama, e);
            AppError::Database(e)
        })
    }

    async fn find_by_kode(&self, kode: &str) -> Result<Vec<Wilayah>> {
        sqlx::query_as::<_, Wilayah>(
            r#"
            SELECT kode, nama
            FROM wilayah
            WHERE kode = $1
            "#,
        )
        .bind(kode)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch wilayah by kode {}: {:?}", kode, e);
            AppError::Database(e)
        })
    }
}
