mod lookup_outcome;
mod wilayah;

pub use lookup_outcome::LookupOutcome;
pub use wilayah::Wilayah;
