mod wilayah_handler;

pub use wilayah_handler::*;
