mod wilayah_repository;

pub use wilayah_repository::{PgWilayahRepository, WilayahRepository};
