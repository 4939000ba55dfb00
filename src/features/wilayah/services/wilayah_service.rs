use std::sync::Arc;

use crate::features::wilayah::models::{LookupOutcome, Wilayah};
use crate::features::wilayah::repositories::WilayahRepository;

/// Resolves region names to codes and codes to names.
///
/// Every call issues exactly one query; nothing is cached between calls.
/// When several records match, the first one returned by the repository
/// wins.
pub struct WilayahService {
    repository: Arc<dyn WilayahRepository>,
}

impl WilayahService {
    pub fn new(repository: Arc<dyn WilayahRepository>) -> Self {
        Self { repository }
    }

    /// Code of a district/village by its exact name.
    pub async fn resolve_by_name(&self, name: &str) -> LookupOutcome {
        let result = self
            .repository
            .find_by_nama(name)
            .await
            .map(|rows| first(rows).map(|w| w.kode));

        log_outcome("resolve_by_name", name, result.into())
    }

    /// Code of a province/regency by name, matched against the uppercased input.
    ///
    /// Only correct because this tier is stored uppercase; there is no
    /// case-insensitive comparison in the query.
    pub async fn resolve_adm2_by_name(&self, name: &str) -> LookupOutcome {
        let normalized = name.to_uppercase();
        let result = self
            .repository
            .find_by_nama(&normalized)
            .await
            .map(|rows| first(rows).map(|w| w.kode));

        log_outcome("resolve_adm2_by_name", &normalized, result.into())
    }

    /// Name of the region with the given code, any tier.
    pub async fn resolve_name_by_code(&self, code: &str) -> LookupOutcome {
        let result = self
            .repository
            .find_by_kode(code)
            .await
            .map(|rows| first(rows).map(|w| w.nama));

        log_outcome("resolve_name_by_code", code, result.into())
    }
}

fn first(rows: Vec<Wilayah>) -> Option<Wilayah> {
    if rows.len() > 1 {
        tracing::debug!("{} records matched, using the first", rows.len());
    }
    rows.into_iter().next()
}

fn log_outcome(operation: &str, input: &str, outcome: LookupOutcome) -> LookupOutcome {
    match &outcome {
        LookupOutcome::Found(value) => {
            tracing::debug!("{} '{}' -> '{}'", operation, input, value)
        }
        LookupOutcome::NotFound => tracing::debug!("{} '{}' -> not found", operation, input),
        LookupOutcome::BackendFault(detail) => {
            tracing::error!("{} '{}' failed: {}", operation, input, detail)
        }
    }
    outcome
}
