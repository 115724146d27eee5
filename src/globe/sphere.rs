use glam::DVec3;

/// Convert lat/lon (degrees) to a unit sphere vector, z as the polar axis.
#[inline(always)]
pub fn to_cartesian(lat: f64, lon: f64) -> DVec3 {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();
    DVec3::new(
        lat_rad.cos() * lon_rad.cos(),
        lat_rad.cos() * lon_rad.sin(),
        lat_rad.sin(),
    )
}

/// Inverse of `to_cartesian` for unit-length input.
/// At the poles (x = y = 0) longitude is 0 by convention.
#[inline(always)]
pub fn to_lat_lon(v: DVec3) -> (f64, f64) {
    let lat = v.z.clamp(-1.0, 1.0).asin().to_degrees();
    if v.x == 0.0 && v.y == 0.0 {
        return (if v.z >= 0.0 { 90.0 } else { -90.0 }, 0.0);
    }
    let lon = v.y.atan2(v.x).to_degrees();
    (lat, lon)
}

/// Rotate a point about the polar (z) axis by `theta` radians.
#[inline(always)]
pub fn rotate_spin(v: DVec3, theta: f64) -> DVec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    DVec3::new(
        cos_t * v.x - sin_t * v.y,
        sin_t * v.x + cos_t * v.y,
        v.z,
    )
}
