//! Command line configuration: `--key=value` flags with defaults.

use anyhow::{Context, Result};
use svarog_math::Vector3;
use svarog_math::parse::parse_scalar;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
    pub camera_position: Vector3,
    pub camera_rotation: Vector3,
    pub punch: Vector3,
    pub eye: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub normal: Vector3,
    pub fov_degrees: f64,
    pub aspect: f64,
    pub z_near: f64,
    pub z_far: f64,
    /// Rotations on the command line are in degrees instead of radians.
    pub degrees: bool,
    pub precision: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
            camera_position: Vector3::new(0.0, 0.0, 5.0),
            camera_rotation: Vector3::ZERO,
            punch: Vector3::ZERO,
            eye: Vector3::new(0.0, 0.0, 5.0),
            target: Vector3::ZERO,
            up: Vector3::Y,
            normal: Vector3::Z,
            fov_degrees: 60.0,
            aspect: 16.0 / 9.0,
            z_near: 0.1,
            z_far: 100.0,
            degrees: false,
            precision: 4,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

/// `WxH` (or `WXH`) to a width / height aspect ratio.
fn parse_size(value: &str) -> Result<f64> {
    let (w, h) = value
        .split_once('x')
        .or_else(|| value.split_once('X'))
        .with_context(|| format!("Expected WIDTHxHEIGHT, got '{value}'"))?;
    let w = w.parse::<u32>().with_context(|| format!("Invalid width '{w}'"))?;
    let h = h.parse::<u32>().with_context(|| format!("Invalid height '{h}'"))?;
    Ok(f64::from(w.max(1)) / f64::from(h.max(1)))
}

impl AppConfig {
    /// Parses program arguments (without the program name).
    /// Unknown flags are logged and ignored; malformed values are errors.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();

        for arg in args {
            if arg == "--degrees" {
                config.degrees = true;
                continue;
            }
            let Some((key, value)) = arg.strip_prefix("--").and_then(|a| a.split_once('=')) else {
                log::warn!("Ignoring unrecognized argument '{}'", arg);
                continue;
            };

            let vector = || {
                value
                    .parse::<Vector3>()
                    .with_context(|| format!("Invalid value for --{key}"))
            };
            let scalar = || parse_scalar(value).with_context(|| format!("Invalid value for --{key}"));

            match key {
                "position" => config.position = vector()?,
                "rotation" => config.rotation = vector()?,
                "scale" => config.scale = vector()?,
                "camera-position" => config.camera_position = vector()?,
                "camera-rotation" => config.camera_rotation = vector()?,
                "punch" => config.punch = vector()?,
                "eye" => config.eye = vector()?,
                "target" => config.target = vector()?,
                "up" => config.up = vector()?,
                "normal" => config.normal = vector()?,
                "fov" => config.fov_degrees = scalar()?,
                "aspect" => config.aspect = scalar()?,
                "size" => config.aspect = parse_size(value)?,
                "near" => config.z_near = scalar()?,
                "far" => config.z_far = scalar()?,
                "degrees" => config.degrees = parse_flag(value),
                "precision" => {
                    config.precision = value
                        .parse::<usize>()
                        .with_context(|| format!("Invalid value for --{key}"))?
                }
                other => log::warn!("Unknown option '--{}', ignoring.", other),
            }
        }

        Ok(config)
    }

    /// Object, camera and punch rotations in radians.
    pub fn rotations_in_radians(&self) -> (Vector3, Vector3, Vector3) {
        if self.degrees {
            let convert = |v: Vector3| v.scale(svarog_math::scalar::DEG_TO_RAD);
            (
                convert(self.rotation),
                convert(self.camera_rotation),
                convert(self.punch),
            )
        } else {
            (self.rotation, self.camera_rotation, self.punch)
        }
    }
}
