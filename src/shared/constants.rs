/// Body returned when a lookup matches no record.
///
/// This is a normal 200 response, not an error.
pub const NOT_FOUND_MESSAGE: &str = "Data tidak ditemukan";

/// Detail returned for paths that match no route.
pub const ROUTE_NOT_FOUND_DETAIL: &str = "Not Found";
