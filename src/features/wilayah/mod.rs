//! Indonesian administrative region (wilayah) code lookup.
//!
//! Resolves names to codes and codes to names against a single flat
//! `wilayah` table of `(kode, nama)` rows. Matching is exact; the only
//! normalization is uppercasing for the province/regency tier, which is
//! stored uppercase.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Route descriptions |
//! | GET | `/{wilayah}` | Code of a district/village by exact name |
//! | GET | `/adm2/{wilayah}` | Code of a province/regency by name, any case |
//! | GET | `/kode/{kode}` | Name of any region by code |
//!
//! Lookups that match nothing answer `200 "Data tidak ditemukan"`. Database
//! failures answer `500 {"detail": "..."}`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgWilayahRepository;
pub use services::WilayahService;
