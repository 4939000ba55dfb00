mod wilayah_service;

pub use wilayah_service::WilayahService;
