use anyhow::{bail, Result};

use crate::braille::BrailleCanvas;
use crate::data;
use crate::globe::classify::LandLookup;
use crate::globe::project::{project, radial_distance};
use crate::globe::shade::{self, Category};
use crate::globe::sphere::{rotate_spin, to_cartesian};

/// Per-frame configuration snapshot. Validated at the boundary
/// (`clamped`), never inside the render passes.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Sample density, 1 (coarse) to 4 (ultra)
    pub quality: u8,
    pub enable_atmosphere: bool,
    pub enable_city_lights: bool,
    pub enable_clouds: bool,
    pub enable_ocean_specular: bool,
    pub enable_polar_ice: bool,
    pub night_mode: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quality: 4,
            enable_atmosphere: true,
            enable_city_lights: true,
            enable_clouds: true,
            enable_ocean_specular: true,
            enable_polar_ice: true,
            night_mode: false,
        }
    }
}

impl RenderConfig {
    /// Clamp out-of-range values to the nearest supported level.
    pub fn clamped(self) -> Self {
        Self {
            quality: self.quality.clamp(1, 4),
            ..self
        }
    }

    /// Subsampling stride over the base grid: quality 4 visits every
    /// grid point, quality 1 every fourth.
    fn stride(&self) -> usize {
        5 - self.quality.clamp(1, 4) as usize
    }
}

// Fixed surface sampling grid: 0.5° cells, sampled at cell centers so
// the exact poles are never visited.
const BASE_STEP: f64 = 0.5;
const LAT_STEPS: usize = 360;
const LON_STEPS: usize = 720;

/// Render one complete frame.
///
/// Pure with respect to its inputs: the same config, lookup, dimensions
/// and angle always produce the same canvas. The only error is an empty
/// drawable area; every per-sample anomaly just drops that sample.
pub fn render_frame(
    cfg: &RenderConfig,
    lookup: &LandLookup,
    width: u16,
    height: u16,
    theta: f64,
) -> Result<BrailleCanvas> {
    let (w, h) = (width as usize, height as usize);
    if w == 0 || h == 0 {
        bail!("terminal too small to render ({}x{})", width, height);
    }

    let cfg = cfg.clamped();
    let light = shade::light_direction(cfg.night_mode);
    let mut canvas = BrailleCanvas::new(w, h);

    // Surface pass: the whole sphere, classified land/ocean/ice
    let stride = cfg.stride();
    for i in (0..LAT_STEPS).step_by(stride) {
        let lat = -90.0 + (i as f64 + 0.5) * BASE_STEP;
        for j in (0..LON_STEPS).step_by(stride) {
            let lon = -180.0 + (j as f64 + 0.5) * BASE_STEP;
            let rotated = rotate_spin(to_cartesian(lat, lon), theta);
            let Some((px, py)) = project(rotated, w, h) else {
                continue;
            };
            if let Some(s) = shade::shade_surface(lat, lon, rotated, light, lookup, &cfg) {
                canvas.plot(px, py, s.color, s.category.priority());
            }
        }
    }

    // City lights, night side only
    if cfg.enable_city_lights && cfg.night_mode {
        for &(_, lat, lon) in data::CITY_LIGHTS {
            let rotated = rotate_spin(to_cartesian(lat, lon), theta);
            let Some((px, py)) = project(rotated, w, h) else {
                continue;
            };
            if let Some(s) = shade::shade_city(rotated, light) {
                canvas.plot(px, py, s.color, s.category.priority());
            }
        }
    }

    // Cloud layer, slightly above the surface
    if cfg.enable_clouds {
        for &(lat, lon) in data::cloud_points() {
            let rotated = rotate_spin(to_cartesian(lat, lon) * shade::CLOUD_RADIUS, theta);
            let Some((px, py)) = project(rotated, w, h) else {
                continue;
            };
            if let Some(s) = shade::shade_cloud(rotated, light) {
                canvas.plot(px, py, s.color, s.category.priority());
            }
        }
    }

    // Atmosphere glow: a screen-space ring over still-empty cells just
    // outside the silhouette
    if cfg.enable_atmosphere {
        for cy in 0..h {
            for cx in 0..w {
                if !canvas.cell(cx, cy).is_blank() {
                    continue;
                }
                let dist = radial_distance(cx as f64 + 0.5, cy as f64 + 0.5, w, h);
                if dist <= shade::GLOW_INNER || dist >= shade::GLOW_OUTER {
                    continue;
                }
                let glow = 1.0 - (dist - 1.0).abs() / 0.15;
                if glow > 0.0 {
                    let mask = if glow < 0.5 { 0x02 } else { 0x80 };
                    canvas.overlay(
                        cx,
                        cy,
                        mask,
                        shade::ATMOSPHERE_COLOR,
                        Category::Atmosphere.priority(),
                    );
                }
            }
        }
    }

    Ok(canvas)
}
