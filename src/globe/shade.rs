use glam::DVec3;

use crate::globe::classify::LandLookup;
use crate::globe::frame::RenderConfig;

// ANSI-256 palettes, darkest to brightest band. Night palettes are
// separate hues, not dimmed day palettes.
pub const LAND_DAY: [u8; 5] = [22, 28, 34, 40, 46];
pub const LAND_NIGHT: [u8; 5] = [58, 94, 130, 136, 142];
pub const OCEAN_DAY: [u8; 5] = [17, 18, 19, 24, 32];
pub const OCEAN_NIGHT: [u8; 5] = [16, 17, 18, 19, 20];

pub const ICE_COLOR: u8 = 231;
pub const ATMOSPHERE_COLOR: u8 = 39;
pub const CITY_LIGHT_COLOR: u8 = 226;
pub const CLOUD_COLOR: u8 = 255;

/// Ice caps are asymmetric: the northern cap starts further poleward.
pub const ICE_LAT_NORTH: f64 = 70.0;
pub const ICE_LAT_SOUTH: f64 = -60.0;

/// Cities glow only where the surface is this dark.
pub const CITY_NIGHT_THRESHOLD: f64 = 0.3;
/// Night mode dims the whole surface by this much before banding.
pub const NIGHT_DIM: f64 = 0.2;

/// Clouds sit slightly above the surface and render faint.
pub const CLOUD_RADIUS: f64 = 1.02;
pub const CLOUD_DIM: f64 = 0.6;

/// Cosine threshold for the ocean specular highlight.
pub const SPECULAR_THRESHOLD: f64 = 0.97;

/// Atmosphere glow band, in units of the sphere's screen radius.
pub const GLOW_INNER: f64 = 0.95;
pub const GLOW_OUTER: f64 = 1.15;

const BANDS: usize = 5;

/// The viewer looks down the +x axis.
const VIEW_DIR: DVec3 = DVec3::new(1.0, 0.0, 0.0);

/// Sample category. Doubles as the cell color priority order: when
/// several categories land in one glyph cell, the highest wins the color.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Category {
    Ocean,
    Land,
    Specular,
    Cloud,
    Ice,
    CityLight,
    Atmosphere,
}

impl Category {
    /// Cell color priority. Land sits above ocean so coastlines stay
    /// visible in cells that straddle the shore.
    #[inline(always)]
    pub fn priority(self) -> u8 {
        match self {
            Category::Ocean => 0,
            Category::Land => 1,
            Category::Specular => 2,
            Category::Cloud => 3,
            Category::Ice => 4,
            Category::CityLight => 5,
            Category::Atmosphere => 6,
        }
    }
}

/// A classified, colored sample ready for the compositor.
#[derive(Clone, Copy, Debug)]
pub struct Shaded {
    pub color: u8,
    pub category: Category,
}

/// Fixed light direction; night mode lights the opposite side.
pub fn light_direction(night_mode: bool) -> DVec3 {
    if night_mode {
        DVec3::new(-0.7, -0.3, 0.6).normalize()
    } else {
        DVec3::new(0.7, 0.3, 0.6).normalize()
    }
}

/// Lambertian intensity: cosine of the angle to the light, floored at 0.
#[inline(always)]
pub fn lambert(v: DVec3, light: DVec3) -> f64 {
    v.dot(light).max(0.0)
}

/// Quantize intensity into one of 5 palette bands. Monotonic in the
/// input; values at or above 1.0 saturate into the top band.
#[inline(always)]
pub fn band(intensity: f64) -> usize {
    ((intensity * BANDS as f64) as usize).min(BANDS - 1)
}

/// Classify and shade one surface-grid sample. Returns `None` when the
/// sample ends up unlit — the dark side of the globe is simply empty.
pub fn shade_surface(
    lat: f64,
    lon: f64,
    rotated: DVec3,
    light: DVec3,
    lookup: &LandLookup,
    cfg: &RenderConfig,
) -> Option<Shaded> {
    let mut intensity = lambert(rotated, light);
    if cfg.night_mode {
        intensity = (intensity - NIGHT_DIM).max(0.0);
    }

    // Ice caps override the surface palette entirely
    if cfg.enable_polar_ice && (lat > ICE_LAT_NORTH || lat < ICE_LAT_SOUTH) {
        if (intensity * 1.5).min(1.0) <= 0.0 {
            return None;
        }
        return Some(Shaded {
            color: ICE_COLOR,
            category: Category::Ice,
        });
    }

    if intensity <= 0.0 {
        return None;
    }

    if lookup.is_land(lat, lon) {
        let palette = if cfg.night_mode { &LAND_NIGHT } else { &LAND_DAY };
        Some(Shaded {
            color: palette[band(intensity)],
            category: Category::Land,
        })
    } else {
        if cfg.enable_ocean_specular && specular_highlight(rotated, light) {
            return Some(Shaded {
                color: OCEAN_DAY[BANDS - 1],
                category: Category::Specular,
            });
        }
        let palette = if cfg.night_mode { &OCEAN_NIGHT } else { &OCEAN_DAY };
        Some(Shaded {
            color: palette[band(intensity)],
            category: Category::Ocean,
        })
    }
}

/// Specular test: the sample direction must lie close to the half-vector
/// between the light and the viewer.
#[inline(always)]
fn specular_highlight(rotated: DVec3, light: DVec3) -> bool {
    let half = (light + VIEW_DIR).normalize();
    rotated.dot(half) > SPECULAR_THRESHOLD
}

/// City lights render only on the dark side of the terminator.
pub fn shade_city(rotated: DVec3, light: DVec3) -> Option<Shaded> {
    if lambert(rotated, light) < CITY_NIGHT_THRESHOLD {
        Some(Shaded {
            color: CITY_LIGHT_COLOR,
            category: Category::CityLight,
        })
    } else {
        None
    }
}

/// Cloud samples carry their own faint shading, independent of the
/// surface below.
pub fn shade_cloud(rotated: DVec3, light: DVec3) -> Option<Shaded> {
    if lambert(rotated, light) * CLOUD_DIM <= 0.0 {
        return None;
    }
    Some(Shaded {
        color: CLOUD_COLOR,
        category: Category::Cloud,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::classify::{Boundary, LandLookup};
    use crate::globe::sphere::to_cartesian;

    fn empty_lookup() -> LandLookup {
        LandLookup::build(&[])
    }

    fn day_cfg() -> RenderConfig {
        RenderConfig {
            quality: 1,
            enable_atmosphere: false,
            enable_city_lights: false,
            enable_clouds: false,
            enable_ocean_specular: false,
            enable_polar_ice: false,
            night_mode: false,
        }
    }

    #[test]
    fn test_light_directions_are_unit() {
        assert!((light_direction(false).length() - 1.0).abs() < 1e-12);
        assert!((light_direction(true).length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_band_monotonic() {
        let samples = [0.0, 0.21, 0.41, 0.61, 0.81];
        let bands: Vec<usize> = samples.iter().map(|&i| band(i)).collect();
        assert_eq!(bands, vec![0, 1, 2, 3, 4]);
        assert!(bands.windows(2).all(|w| w[0] <= w[1]));
        // Saturation at and beyond full intensity
        assert_eq!(band(1.0), 4);
        assert_eq!(band(1.5), 4);
    }

    #[test]
    fn test_dark_side_surface_is_omitted() {
        let cfg = day_cfg();
        let light = light_direction(false);
        // Point opposite the light: intensity 0
        let v = -light;
        assert!(shade_surface(0.0, 0.0, v, light, &empty_lookup(), &cfg).is_none());
    }

    #[test]
    fn test_land_and_ocean_use_their_palettes() {
        let square = Boundary::new(
            "square",
            vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
        );
        let lookup = LandLookup::build(&[square]);
        let cfg = day_cfg();
        let light = light_direction(false);

        let v = to_cartesian(5.0, 5.0);
        let land = shade_surface(5.0, 5.0, v, light, &lookup, &cfg).unwrap();
        assert_eq!(land.category, Category::Land);
        assert!(LAND_DAY.contains(&land.color));

        let w = to_cartesian(5.0, 40.0);
        let ocean = shade_surface(5.0, 40.0, w, light, &lookup, &cfg).unwrap();
        assert_eq!(ocean.category, Category::Ocean);
        assert!(OCEAN_DAY.contains(&ocean.color));
    }

    #[test]
    fn test_polar_ice_overrides_surface() {
        let mut cfg = day_cfg();
        cfg.enable_polar_ice = true;
        let light = light_direction(false);

        let v = to_cartesian(75.0, 10.0);
        let north = shade_surface(75.0, 10.0, v, light, &empty_lookup(), &cfg).unwrap();
        assert_eq!(north.category, Category::Ice);
        assert_eq!(north.color, ICE_COLOR);

        // The caps are asymmetric: -65° is icy, +65° is not
        let s = to_cartesian(-65.0, 10.0);
        let south = shade_surface(-65.0, 10.0, s, light, &empty_lookup(), &cfg).unwrap();
        assert_eq!(south.category, Category::Ice);
        let n = to_cartesian(65.0, 10.0);
        let not_ice = shade_surface(65.0, 10.0, n, light, &empty_lookup(), &cfg).unwrap();
        assert_ne!(not_ice.category, Category::Ice);
    }

    #[test]
    fn test_city_light_only_on_dark_side() {
        let light = light_direction(true);
        // A point aligned with the light is fully lit: no city glow
        assert!(shade_city(light, light).is_none());
        // A point opposite the light is dark: glows
        let dark = shade_city(-light, light).unwrap();
        assert_eq!(dark.color, CITY_LIGHT_COLOR);
        assert_eq!(dark.category, Category::CityLight);
    }

    #[test]
    fn test_specular_needs_flag_and_alignment() {
        let light = light_direction(false);
        let half = (light + DVec3::new(1.0, 0.0, 0.0)).normalize();
        let (lat, lon) = crate::globe::sphere::to_lat_lon(half);

        let mut cfg = day_cfg();
        let plain = shade_surface(lat, lon, half, light, &empty_lookup(), &cfg).unwrap();
        assert_eq!(plain.category, Category::Ocean);

        cfg.enable_ocean_specular = true;
        let spec = shade_surface(lat, lon, half, light, &empty_lookup(), &cfg).unwrap();
        assert_eq!(spec.category, Category::Specular);
        assert_eq!(spec.color, OCEAN_DAY[4]);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Category::Atmosphere.priority() > Category::CityLight.priority());
        assert!(Category::CityLight.priority() > Category::Ice.priority());
        assert!(Category::Ice.priority() > Category::Cloud.priority());
        assert!(Category::Cloud.priority() > Category::Specular.priority());
        assert!(Category::Specular.priority() > Category::Land.priority());
        assert!(Category::Land.priority() > Category::Ocean.priority());
    }
}
