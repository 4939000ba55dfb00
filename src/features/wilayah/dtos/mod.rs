mod wilayah_dto;

pub use wilayah_dto::RouteIndexDto;
