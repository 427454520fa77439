//! Camera rig configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults (the sunset/map scene)
//! 2. `camera.ron` file (if exists)
//! 3. Environment variables prefixed with `CAMERA_`
//!
//! Example environment variable: `CAMERA_FRAMING__BASE_HEIGHT=4.0`
//!
//! The RON file is parsed with `ron` directly so enum values such as
//! `easing: CubicOut` survive, then merged like any other layer.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{CameraDirector, CameraPlan, EaseType};
use crate::framing::{camera_height, Viewport};
use crate::rig::{CameraRig, Wobble};

/// Main rig configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigConfig {
    #[serde(default)]
    pub framing: FramingConfig,

    #[serde(default)]
    pub wobble: WobbleConfig,

    /// Plans for the camera eye position, in playback order
    #[serde(default = "default_position_plans")]
    pub position: Vec<PlanConfig>,

    /// Plans for the look-at target, in playback order
    #[serde(default = "default_look_at_plans")]
    pub look_at: Vec<PlanConfig>,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            framing: FramingConfig::default(),
            wobble: WobbleConfig::default(),
            position: default_position_plans(),
            look_at: default_look_at_plans(),
        }
    }
}

/// Viewport framing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramingConfig {
    /// Map vantage height before aspect correction
    pub base_height: f32,
    /// Overwrite the map vantage height of the first two position plans
    /// with the aspect-corrected height when building the rig
    pub reframe_map_plans: bool,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            base_height: 3.5,
            reframe_map_plans: true,
        }
    }
}

/// Look-at wobble settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WobbleConfig {
    pub enabled: bool,
    /// Angular frequency per axis (radians per second)
    pub frequency: [f32; 3],
    /// Peak offset per axis
    pub amplitude: [f32; 3],
}

impl Default for WobbleConfig {
    fn default() -> Self {
        let wobble = Wobble::default();
        Self {
            enabled: true,
            frequency: wobble.frequency.to_array(),
            amplitude: wobble.amplitude.to_array(),
        }
    }
}

impl WobbleConfig {
    pub fn to_wobble(&self) -> Option<Wobble> {
        self.enabled.then(|| Wobble {
            frequency: Vec3::from_array(self.frequency),
            amplitude: Vec3::from_array(self.amplitude),
        })
    }
}

/// One camera move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub from: [f32; 3],
    pub to: [f32; 3],
    /// Transition length in seconds
    pub duration: f64,
    /// Hold at `to` in seconds
    #[serde(default)]
    pub stall: f64,
    /// Shorthand for sine ease-in-out
    #[serde(default)]
    pub ease: bool,
    /// Explicit curve, takes precedence over `ease` unless linear
    #[serde(default)]
    pub easing: EaseType,
}

impl PlanConfig {
    /// The curve this move uses after resolving the `ease` shorthand.
    pub fn curve(&self) -> EaseType {
        if self.easing.is_eased() {
            self.easing
        } else {
            EaseType::from_flag(self.ease)
        }
    }

    pub fn to_plan(&self) -> CameraPlan {
        CameraPlan::with_easing(
            Vec3::from_array(self.from),
            Vec3::from_array(self.to),
            self.duration,
            self.stall,
            self.curve(),
        )
    }
}

/// Name of the optional config file in the working directory
const CONFIG_FILE: &str = "camera.ron";

/// Map vantage height used in the compiled defaults (a 16:9 landscape view).
const DEFAULT_MAP_HEIGHT: f32 = 720.0 / 1280.0 + 3.5;

fn default_position_plans() -> Vec<PlanConfig> {
    let map_vantage = [-0.1, DEFAULT_MAP_HEIGHT, -0.75];
    let sunset_vantage = [-0.1, 2.5, 0.5];
    vec![
        PlanConfig {
            from: map_vantage,
            to: sunset_vantage,
            duration: 2.0,
            stall: 998.0,
            ease: true,
            easing: EaseType::Linear,
        },
        PlanConfig {
            from: sunset_vantage,
            to: map_vantage,
            duration: 2.0,
            stall: 998.0,
            ease: true,
            easing: EaseType::Linear,
        },
    ]
}

fn default_look_at_plans() -> Vec<PlanConfig> {
    let over_map = [-0.1, 2.0, -1.5];
    let toward_sunset = [-0.1, 2.0, -5.0];
    vec![
        PlanConfig {
            from: over_map,
            to: toward_sunset,
            duration: 2.0,
            stall: 998.0,
            ease: true,
            easing: EaseType::Linear,
        },
        PlanConfig {
            from: toward_sunset,
            to: over_map,
            duration: 1.5,
            stall: 998.5,
            ease: true,
            easing: EaseType::Linear,
        },
    ]
}

impl RigConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `camera.ron` file (if exists)
    /// 3. Environment variables prefixed with `CAMERA_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Same as [`load`](Self::load) with an explicit path for the file layer.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Layer 1: Compiled defaults
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialize default camera configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        // Layer 2: Config file (optional, won't error if missing)
        if path.exists() {
            let file = Config::try_from(&Self::from_file(path)?)
                .with_context(|| format!("Failed to merge camera config: {}", path.display()))?;
            builder = builder.add_source(file);
        }

        // Layer 3: Environment variables (CAMERA_FRAMING__BASE_HEIGHT, etc.)
        let builder = builder.add_source(
            Environment::with_prefix("CAMERA")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().context("Failed to build camera configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize camera configuration")
    }

    /// Load configuration from a RON file, without defaults or environment layers
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera config: {}", path.display()))?;

        let config = ron::from_str(&content)
            .with_context(|| format!("Failed to parse RON camera config: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a RON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize camera config to RON")?;

        std::fs::write(path.as_ref(), ron).with_context(|| {
            format!("Failed to write camera config: {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Build a rig for the given viewport.
    pub fn build(&self, viewport: Viewport) -> CameraRig {
        let position = CameraDirector::new(self.position.iter().map(PlanConfig::to_plan).collect());
        let look_at = CameraDirector::new(self.look_at.iter().map(PlanConfig::to_plan).collect());

        let mut rig = CameraRig::new(position, look_at)
            .with_wobble(self.wobble.to_wobble())
            .with_base_height(self.framing.base_height);

        if self.framing.reframe_map_plans && !rig.reframe(viewport) {
            log::warn!(
                "Map reframing requested but the rig has only {} position plans; plans left as configured",
                self.position.len()
            );
        }

        log::info!(
            "Built camera rig: {} position plans, {} look-at plans (map height {:.3})",
            self.position.len(),
            self.look_at.len(),
            camera_height(viewport, self.framing.base_height)
        );
        rig
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RigConfig::default();
        assert_eq!(config.framing.base_height, 3.5);
        assert!(config.framing.reframe_map_plans);
        assert!(config.wobble.enabled);
        assert_eq!(config.position.len(), 2);
        assert_eq!(config.look_at.len(), 2);
        assert_eq!(config.look_at[1].duration, 1.5);
        assert_eq!(config.look_at[1].stall, 998.5);
        assert!(config.position.iter().all(|p| p.ease));
    }

    // Environment variables are process-wide, so every assertion that can be
    // affected by `CAMERA_FRAMING__BASE_HEIGHT` lives in this one test.
    #[test]
    fn test_load_config_with_defaults_and_env_override() {
        // Should load defaults when no config file exists
        let config = RigConfig::load().expect("Failed to load config");
        assert_eq!(config.framing.base_height, 3.5);
        assert_eq!(config.position, default_position_plans());
        assert_eq!(config.look_at, default_look_at_plans());
        assert_eq!(config.wobble.frequency, [3.0, 1.4, 2.0]);

        std::env::set_var("CAMERA_FRAMING__BASE_HEIGHT", "9.0");
        let overridden = RigConfig::load();
        std::env::remove_var("CAMERA_FRAMING__BASE_HEIGHT");

        let overridden = overridden.expect("Failed to load config with env override");
        assert_eq!(overridden.framing.base_height, 9.0);
        // Untouched keys keep their defaults
        assert!(overridden.framing.reframe_map_plans);
        assert_eq!(overridden.position, default_position_plans());
    }

    #[test]
    fn test_load_from_file_layer_keeps_easing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera.ron");

        let mut config = RigConfig::default();
        config.wobble.enabled = false;
        config.position[0].ease = false;
        config.position[0].easing = EaseType::CubicOut;
        config.to_file(&path).unwrap();

        let loaded = RigConfig::load_from(&path).unwrap();
        assert!(!loaded.wobble.enabled);
        assert_eq!(loaded.position[0].easing, EaseType::CubicOut);
        assert_eq!(loaded.position[1], default_position_plans()[1]);
    }

    #[test]
    fn test_easing_selects_curve_from_ron() {
        let ron = "(position: [
            (from: (0.0, 0.0, 0.0), to: (1.0, 1.0, 1.0), duration: 1.0, easing: CubicOut),
            (from: (1.0, 1.0, 1.0), to: (0.0, 0.0, 0.0), duration: 1.0, ease: true),
            (from: (0.0, 0.0, 0.0), to: (1.0, 0.0, 0.0), duration: 1.0),
        ])";
        let config: RigConfig = ron::from_str(ron).unwrap();
        assert_eq!(config.position[0].curve(), EaseType::CubicOut);
        assert_eq!(config.position[1].curve(), EaseType::SineInOut);
        assert_eq!(config.position[2].curve(), EaseType::Linear);

        let mut rig = config.build(Viewport::default());
        assert_eq!(rig.position().plan(0).unwrap().easing(), EaseType::CubicOut);
        assert_eq!(rig.position().plan(1).unwrap().easing(), EaseType::SineInOut);

        // Cubic ease-out is ahead of linear a quarter of the way in
        rig.update(0.0);
        let p = rig.update(0.25).position.unwrap();
        assert!(p.x > 0.25);
    }

    #[test]
    fn test_build_with_single_position_plan_skips_reframe() {
        let mut config = RigConfig::default();
        config.position.truncate(1);
        let rig = config.build(Viewport::new(500.0, 1000.0));

        // The lone plan keeps its configured start height
        let plan = rig.position().plan(0).unwrap();
        assert_eq!(plan.from().y, DEFAULT_MAP_HEIGHT);
    }

    #[test]
    fn test_build_reframes_for_viewport() {
        let config = RigConfig::default();
        let rig = config.build(Viewport::new(1000.0, 500.0));

        let map = rig.position().plan(1).unwrap();
        assert!((map.to().y - 4.0).abs() < 1e-6);
        assert!(rig.wobble().is_some());
        assert_eq!(rig.base_height(), 3.5);
    }

    #[test]
    fn test_build_without_reframe_keeps_plans() {
        let mut config = RigConfig::default();
        config.framing.reframe_map_plans = false;
        config.wobble.enabled = false;
        let rig = config.build(Viewport::new(500.0, 1000.0));

        let map = rig.position().plan(1).unwrap();
        assert_eq!(map.to().y, DEFAULT_MAP_HEIGHT);
        assert!(rig.wobble().is_none());
    }

    #[test]
    fn test_ron_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera.ron");

        let mut config = RigConfig::default();
        config.framing.base_height = 5.0;
        config.position.push(PlanConfig {
            from: [0.0, 0.0, 0.0],
            to: [1.0, 2.0, 3.0],
            duration: 4.0,
            stall: 0.0,
            ease: false,
            easing: EaseType::QuadOut,
        });
        config.to_file(&path).unwrap();

        let ron = std::fs::read_to_string(&path).unwrap();
        assert!(ron.contains("base_height"));

        let loaded = RigConfig::from_file(&path).unwrap();
        assert_eq!(loaded.framing.base_height, 5.0);
        assert_eq!(loaded.position, config.position);
    }

    #[test]
    fn test_partial_ron_uses_scene_plans() {
        let config: RigConfig = ron::from_str("(framing: (base_height: 2.0, reframe_map_plans: false))").unwrap();
        assert_eq!(config.framing.base_height, 2.0);
        assert_eq!(config.look_at, default_look_at_plans());
        assert!(config.wobble.enabled);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(RigConfig::from_file("does/not/exist.ron").is_err());
    }
}
