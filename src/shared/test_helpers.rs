#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::wilayah::models::Wilayah;
#[cfg(test)]
use crate::features::wilayah::repositories::WilayahRepository;

/// In-memory table that answers queries in insertion order.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryWilayahRepository {
    records: Vec<Wilayah>,
    queries: AtomicUsize,
}

#[cfg(test)]
impl InMemoryWilayahRepository {
    pub fn new(records: Vec<Wilayah>) -> Self {
        Self {
            records,
            queries: AtomicUsize::new(0),
        }
    }

    /// Number of queries served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn filter(&self, predicate: impl Fn(&Wilayah) -> bool) -> Vec<Wilayah> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.records.iter().filter(|w| predicate(w)).cloned().collect()
    }
}

#[cfg(test)]
#[async_trait]
impl WilayahRepository for InMemoryWilayahRepository {
    async fn find_by_nama(&self, nama: &str) -> Result<Vec<Wilayah>> {
        Ok(self.filter(|w| w.nama == nama))
    }

    async fn find_by_kode(&self, kode: &str) -> Result<Vec<Wilayah>> {
        Ok(self.filter(|w| w.kode == kode))
    }
}

/// Repository whose backend is never reachable.
#[cfg(test)]
pub struct UnreachableWilayahRepository;

#[cfg(test)]
pub const UNREACHABLE_DETAIL: &str = "connection refused";

#[cfg(test)]
fn unreachable() -> AppError {
    AppError::Database(sqlx::Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        UNREACHABLE_DETAIL,
    )))
}

#[cfg(test)]
#[async_trait]
impl WilayahRepository for UnreachableWilayahRepository {
    async fn find_by_nama(&self, _nama: &str) -> Result<Vec<Wilayah>> {
        Err(unreachable())
    }

    async fn find_by_kode(&self, _kode: &str) -> Result<Vec<Wilayah>> {
        Err(unreachable())
    }
}

/// Small fixture covering both tiers and a duplicated name.
#[cfg(test)]
pub fn sample_wilayah() -> Vec<Wilayah> {
    vec![
        Wilayah::new("33", "JAWA TENGAH"),
        Wilayah::new("33.01", "KAB. CILACAP"),
        Wilayah::new("33.01.01", "Example Subdistrict"),
        Wilayah::new("33.01.01.2001", "Dayeuhluhur"),
        Wilayah::new("32.05.14.2003", "Sukamaju"),
        Wilayah::new("32.06.11.2007", "Sukamaju"),
    ]
}
