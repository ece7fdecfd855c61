//! Configuration of a [`Scene`](crate::scene::Scene).
//!
//! Every field has a default, so a configuration file only needs to list what it overrides:
//!
//! ```
//! # use tetrix::prelude::*;
//! let config = Config::from_json(r#"{ "anaglyph": true, "parallax": 0.05 }"#).unwrap();
//!
//! assert_eq!(config.mode(), Mode::Anaglyph);
//! assert_eq!(config.min_side(), 10.0);
//! ```

use glam::DVec3;
use kurbo::Rect;
use peniko::{color::Srgb, Color};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Leaf threshold of a mono scene.
pub const MONO_MIN_SIDE: f64 = 30.0;
/// Leaf threshold of a stereo scene; each image is smaller, so it gets more detail.
pub const STEREO_MIN_SIDE: f64 = 10.0;
/// Side of each fractal in real-3D mode, small enough for two to fit side by side.
pub const REAL_3D_SIDE: f64 = 120.0;
/// Side of the fractal as a fraction of the viewport width, outside real-3D mode.
pub const VIEWPORT_SIDE_FRACTION: f64 = 0.5;
/// Distance between the two camera centres in real-3D mode, in pixels.
pub const CAMERA_SEPARATION: f64 = 220.0;
/// Initial Y rotation of each camera, in radians, applied with opposite signs.
pub const PARALLAX: f64 = 0.04;
/// Half a degree of rotation per unit of scroll delta.
pub const ROTATION_PER_UNIT: f64 = std::f64::consts::PI / 360.0;
/// Deepest subdivision a scene accepts; a tree of this height has `4^12` leaves.
pub const MAX_DEPTH: u32 = 12;
/// Default translucent fill.
pub const FILL_COLOUR: &str = "rgba(102,102,153,0.5)";
/// Default left and right anaglyph fills.
pub const ANAGLYPH_COLOURS: [&str; 2] = ["rgba(255,0,0,0.5)", "rgba(0,255,255,0.5)"];

/// How the fractal is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A single camera.
    #[default]
    Mono,
    /// Two cameras side by side, for cross-eye viewing.
    Real3d,
    /// Two overlapping cameras with red and cyan fills.
    Anaglyph,
}

impl Mode {
    /// Resolves the startup flags. `anaglyph` wins over `real_3d`.
    #[inline]
    pub fn from_flags(real_3d: bool, anaglyph: bool) -> Self {
        match (real_3d, anaglyph) {
            (_, true) => Self::Anaglyph,
            (true, false) => Self::Real3d,
            (false, false) => Self::Mono,
        }
    }

    /// Whether the mode renders two cameras.
    #[inline]
    pub fn is_stereo(self) -> bool {
        self != Self::Mono
    }
}

/// Settings read once when a scene is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render two cameras side by side.
    pub real_3d: bool,
    /// Render two overlapping red/cyan cameras. Overrides `real_3d`.
    pub anaglyph: bool,
    /// Side of the whole fractal. Defaults depend on the [`Mode`].
    pub side: Option<f64>,
    /// Leaf threshold. Defaults depend on the [`Mode`].
    pub min_side: Option<f64>,
    /// Distance between the camera centres in real-3D mode, in pixels.
    pub camera_separation: f64,
    /// Initial Y rotation of each stereo camera, in radians.
    pub parallax: f64,
    /// Rotation per unit of scroll delta, in radians.
    pub rotation_per_unit: f64,
    /// Deepest subdivision allowed between `side` and `min_side`.
    pub max_depth: u32,
    /// CSS colour of the faces in mono and real-3D mode.
    pub fill_colour: String,
    /// CSS colours of the left and right cameras in anaglyph mode.
    pub anaglyph_colours: [String; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            real_3d: false,
            anaglyph: false,
            side: None,
            min_side: None,
            camera_separation: CAMERA_SEPARATION,
            parallax: PARALLAX,
            rotation_per_unit: ROTATION_PER_UNIT,
            max_depth: MAX_DEPTH,
            fill_colour: FILL_COLOUR.to_owned(),
            anaglyph_colours: ANAGLYPH_COLOURS.map(str::to_owned),
        }
    }
}

impl Config {
    /// Parses a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The presentation mode selected by the flags.
    #[inline]
    pub fn mode(&self) -> Mode {
        Mode::from_flags(self.real_3d, self.anaglyph)
    }

    /// Leaf threshold, either configured or the default for the mode.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.min_side.unwrap_or(if self.mode().is_stereo() {
            STEREO_MIN_SIDE
        } else {
            MONO_MIN_SIDE
        })
    }

    /// Side of the whole fractal, either configured or the default for the mode and viewport.
    #[inline]
    pub fn side(&self, viewport: &Viewport) -> f64 {
        self.side.unwrap_or(match self.mode() {
            Mode::Real3d => REAL_3D_SIDE,
            Mode::Mono | Mode::Anaglyph => viewport.width * VIEWPORT_SIDE_FRACTION,
        })
    }

    /// Distance between the camera centres; only real-3D mode separates them.
    #[inline]
    pub fn separation(&self) -> f64 {
        match self.mode() {
            Mode::Real3d => self.camera_separation,
            Mode::Mono | Mode::Anaglyph => 0.0,
        }
    }
}

/// The drawing area, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Logical width.
    pub width: f64,
    /// Logical height.
    pub height: f64,
    /// Device pixels per logical pixel.
    pub scale: f64,
}

impl Viewport {
    /// Creates a new [`Viewport`].
    #[inline]
    pub const fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Centre of the viewport, on the z = 0 plane.
    #[inline]
    pub fn centre(&self) -> DVec3 {
        DVec3::new(self.width / 2.0, self.height / 2.0, 0.0)
    }

    /// The whole viewport as a rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Size of the backing store in device pixels.
    #[inline]
    pub fn physical_size(&self) -> (f64, f64) {
        (self.width * self.scale, self.height * self.scale)
    }

    pub(crate) fn validate(self) -> Result<Self> {
        crate::error::length("viewport width", self.width)?;
        crate::error::length("viewport height", self.height)?;
        crate::error::length("viewport scale", self.scale)?;
        Ok(self)
    }
}

/// Parses a CSS colour string.
pub fn parse_colour(value: &str) -> Result<Color> {
    peniko::color::parse_color(value)
        .map(|colour| colour.to_alpha_color::<Srgb>())
        .map_err(|err| Error::InvalidColour {
            value: value.to_owned(),
            reason: err.to_string(),
        })
}
