use glam::DVec3;

/// Project a rotated unit-sphere point orthographically into fractional
/// character-grid coordinates. Returns `None` for back-hemisphere points.
///
/// The view axis is +x: a point faces the camera only while its rotated x
/// coordinate is strictly positive (depth exactly 0 is culled). The
/// remaining two coordinates map onto the screen with separate horizontal
/// and vertical scales to compensate for glyph cells being roughly twice
/// as tall as they are wide.
#[inline(always)]
pub fn project(v: DVec3, width: usize, height: usize) -> Option<(f64, f64)> {
    if v.x <= 0.0 {
        return None;
    }

    let sx = width as f64 / 2.0 + (width as f64 / 3.5) * v.y;
    let sy = height as f64 / 2.0 - (height as f64 / 3.0) * v.z;
    Some((sx, sy))
}

/// Radial distance of a screen point from the globe center, in units of
/// the sphere's projected radius (1.0 = silhouette). Used by the
/// atmosphere glow ring, which lives in screen space rather than on the
/// sphere.
#[inline(always)]
pub fn radial_distance(px: f64, py: f64, width: usize, height: usize) -> f64 {
    let nx = (px - width as f64 / 2.0) / (width as f64 / 3.5);
    let ny = (py - height as f64 / 2.0) / (height as f64 / 3.0);
    (nx * nx + ny * ny).sqrt()
}
