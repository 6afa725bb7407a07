//! Viewer configuration, loadable from TOML.
//!
//! Every section has defaults, so a partial file (or none at all) is valid:
//!
//! ```toml
//! report_interval = 2.0
//!
//! [window]
//! title = "Bunny"
//! width = 1024
//!
//! [keys]
//! reset = "R"
//! ```

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::camera::CameraHome;
use crate::error::ConfigError;
use crate::input::{HeldKeys, Key};
use crate::light::LightAngles;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Wait for vertical blank when presenting.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Viewer".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            vsync: true,
        }
    }
}

/// Home pose and projection parameters for the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraConfig {
    pub fn home(&self) -> CameraHome {
        CameraHome {
            position: self.position,
            target: self.target,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        let home = CameraHome::default();
        Self {
            position: home.position,
            target: home.target,
            fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub theta_degrees: f32,
    pub phi_degrees: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
}

impl LightConfig {
    pub fn angles(&self) -> LightAngles {
        LightAngles::new(self.theta_degrees.to_radians(), self.phi_degrees.to_radians())
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            theta_degrees: 45.0,
            phi_degrees: 45.0,
            speed: PI,
        }
    }
}

/// Keys driving the reset and light actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub reset: Key,
    pub theta_decrease: Key,
    pub theta_increase: Key,
    pub phi_increase: Key,
    pub phi_decrease: Key,
}

impl KeyBindings {
    /// Sample the bound keys through `is_held`.
    pub fn sample(&self, is_held: impl Fn(Key) -> bool) -> HeldKeys {
        HeldKeys {
            reset: is_held(self.reset),
            theta_decrease: is_held(self.theta_decrease),
            theta_increase: is_held(self.theta_increase),
            phi_increase: is_held(self.phi_increase),
            phi_decrease: is_held(self.phi_decrease),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            reset: Key::Space,
            theta_decrease: Key::A,
            theta_increase: Key::D,
            phi_increase: Key::S,
            phi_decrease: Key::W,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Seconds between frames-per-second reports.
    pub report_interval: f64,
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub keys: KeyBindings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            report_interval: 1.0,
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl ViewerConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !self.light.speed.is_finite() {
            return Err(ConfigError::Invalid("light speed must be finite".into()));
        }
        if self.report_interval.is_nan() || self.report_interval <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "report interval must be positive, got {}",
                self.report_interval
            )));
        }
        if self.camera.position == self.camera.target {
            return Err(ConfigError::Invalid(
                "camera position and target must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_camera_home(mut self, position: Vec3, target: Vec3) -> Self {
        self.camera.position = position;
        self.camera.target = target;
        self
    }

    pub fn with_light_speed(mut self, speed: f32) -> Self {
        self.light.speed = speed;
        self
    }

    pub fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_report_interval(mut self, seconds: f64) -> Self {
        self.report_interval = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_viewer_constants() {
        let config = ViewerConfig::default();
        assert_eq!(config.window.title, "Viewer");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.camera.home(), CameraHome::default());
        assert_eq!(config.light.angles(), LightAngles::default());
        assert_eq!(config.light.speed, PI);
        assert_eq!(config.keys.reset, Key::Space);
        assert_eq!(config.report_interval, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ViewerConfig::from_toml_str(
            r#"
            report_interval = 2.5

            [window]
            title = "Bunny"

            [camera]
            position = [0.0, 1.0, 4.0]

            [keys]
            reset = "R"
            "#,
        )
        .unwrap();
        assert_eq!(config.window.title, "Bunny");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.camera.position, Vec3::new(0.0, 1.0, 4.0));
        assert_eq!(config.camera.target, Vec3::ZERO);
        assert_eq!(config.keys.reset, Key::R);
        assert_eq!(config.keys.phi_decrease, Key::W);
        assert_eq!(config.report_interval, 2.5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = ViewerConfig::default().with_window_size(0, 600);
        assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

        let interval = ViewerConfig::default().with_report_interval(0.0);
        assert!(matches!(interval.validate(), Err(ConfigError::Invalid(_))));

        let speed = ViewerConfig::default().with_light_speed(f32::NAN);
        assert!(matches!(speed.validate(), Err(ConfigError::Invalid(_))));

        let parse = ViewerConfig::from_toml_str("[window]\nwidth = \"wide\"");
        assert!(matches!(parse, Err(ConfigError::Parse(_))));

        let key = ViewerConfig::from_toml_str("[keys]\nreset = \"F13\"");
        assert!(matches!(key, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip_keeps_bindings() {
        let config = ViewerConfig::default()
            .with_title("Round")
            .with_keys(KeyBindings {
                reset: Key::Enter,
                ..KeyBindings::default()
            });
        let text = config.to_toml_string().unwrap();
        assert_eq!(ViewerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_sample_reads_bound_keys_only() {
        let keys = KeyBindings::default();
        let held = keys.sample(|key| matches!(key, Key::Space | Key::W | Key::Q));
        assert_eq!(
            held,
            HeldKeys {
                reset: true,
                phi_decrease: true,
                ..HeldKeys::default()
            }
        );
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = ViewerConfig::load("/nonexistent/vista.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/vista.toml"));
    }
}
