use std::f64::consts::TAU;
use std::time::Instant;

use crate::globe::classify::LandLookup;
use crate::globe::frame::RenderConfig;

/// Auto-rotation per frame tick (radians).
pub const ROTATION_SPEED: f64 = 0.03;
/// Arrow-key rotation nudge (radians).
pub const MANUAL_STEP: f64 = 0.15;

/// The rotation angle, wrapping modulo 2π. The only piece of state that
/// survives from one frame to the next.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationState {
    angle: f64,
}

impl RotationState {
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advance by `delta` radians, wrapping into [0, 2π).
    pub fn advance(&mut self, delta: f64) {
        self.angle = (self.angle + delta).rem_euclid(TAU);
    }
}

/// Application state
pub struct App {
    pub config: RenderConfig,
    pub rotation: RotationState,
    /// Built once at startup, read-only for the life of the process
    pub lookup: LandLookup,
    pub paused: bool,
    pub should_quit: bool,
    frames: u32,
    started: Instant,
}

impl App {
    pub fn new(lookup: LandLookup) -> Self {
        Self {
            config: RenderConfig::default(),
            rotation: RotationState::default(),
            lookup,
            paused: false,
            should_quit: false,
            frames: 0,
            started: Instant::now(),
        }
    }

    /// Per-frame tick: auto-rotate unless paused, count the frame.
    pub fn tick(&mut self) {
        if !self.paused {
            self.rotation.advance(ROTATION_SPEED);
        }
        self.frames = self.frames.saturating_add(1);
    }

    /// Manual rotation from the arrow keys; works while paused too.
    pub fn nudge(&mut self, direction: f64) {
        self.rotation.advance(direction * MANUAL_STEP);
    }

    pub fn set_quality(&mut self, quality: u8) {
        self.config.quality = quality.clamp(1, 4);
    }

    pub fn toggle_night(&mut self) {
        self.config.night_mode = !self.config.night_mode;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_atmosphere(&mut self) {
        self.config.enable_atmosphere = !self.config.enable_atmosphere;
    }

    pub fn toggle_city_lights(&mut self) {
        self.config.enable_city_lights = !self.config.enable_city_lights;
    }

    pub fn toggle_clouds(&mut self) {
        self.config.enable_clouds = !self.config.enable_clouds;
    }

    pub fn toggle_specular(&mut self) {
        self.config.enable_ocean_specular = !self.config.enable_ocean_specular;
    }

    pub fn toggle_polar_ice(&mut self) {
        self.config.enable_polar_ice = !self.config.enable_polar_ice;
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Frames per second since startup.
    pub fn fps(&self) -> f64 {
        self.frames as f64 / self.started.elapsed().as_secs_f64().max(1e-3)
    }

    /// Current rotation in degrees, for the status bar.
    pub fn theta_degrees(&self) -> f64 {
        self.rotation.angle().to_degrees() % 360.0
    }

    pub fn mode_label(&self) -> &'static str {
        if self.config.night_mode {
            "Night"
        } else {
            "Day"
        }
    }

    pub fn quality_label(&self) -> &'static str {
        match self.config.quality.clamp(1, 4) {
            1 => "Low",
            2 => "Medium",
            3 => "High",
            _ => "Ultra",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(LandLookup::build(&[]))
    }

    #[test]
    fn test_rotation_wraps() {
        let mut rot = RotationState::default();
        for _ in 0..1000 {
            rot.advance(0.15);
        }
        assert!((0.0..TAU).contains(&rot.angle()));

        rot.advance(-0.3);
        assert!((0.0..TAU).contains(&rot.angle()));
    }

    #[test]
    fn test_pause_stops_auto_rotation() {
        let mut app = test_app();
        app.toggle_pause();
        let before = app.rotation.angle();
        app.tick();
        assert_eq!(app.rotation.angle(), before);
        // Manual nudges still work while paused
        app.nudge(1.0);
        assert!((app.rotation.angle() - before - MANUAL_STEP).abs() < 1e-12);
    }

    #[test]
    fn test_quality_clamped_at_boundary() {
        let mut app = test_app();
        app.set_quality(99);
        assert_eq!(app.config.quality, 4);
        app.set_quality(0);
        assert_eq!(app.config.quality, 1);
    }

    #[test]
    fn test_toggles_flip() {
        let mut app = test_app();
        let night = app.config.night_mode;
        app.toggle_night();
        assert_ne!(app.config.night_mode, night);
        let atmo = app.config.enable_atmosphere;
        app.toggle_atmosphere();
        assert_ne!(app.config.enable_atmosphere, atmo);
    }
}
