/// Mean earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Equatorial circumference of the earth, in kilometers.
pub const EARTH_CIRCUMFERENCE_KM: f64 = 40075.0;

/// Latitude of the north pole.
pub const MAX_LATITUDE_DEG: f64 = 90.0;

/// Latitude of the south pole. Anything below this is off the map.
pub const MIN_LATITUDE_DEG: f64 = -90.0;
