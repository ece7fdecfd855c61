//! # Tetrix
//!
//! Tetrix renders an interactive [Sierpinski tetrahedron](https://en.wikipedia.org/wiki/Sierpi%C5%84ski_triangle#Analogues_in_higher_dimensions)
//! onto any 2D surface that can fill polygons, optionally as a stereo pair for cross-eye viewing or
//! red/cyan glasses.
//!
//! ## Goals
//!
//! The fractal is drawn as a tree of regular tetrahedra that subdivides itself until the pieces
//! are small enough, then fills the four faces of each piece with a translucent colour. The
//! projection is orthographic: depth is simply dropped, and overlapping translucent faces are what
//! make the shape readable.
//!
//! The subdivision is cached between frames. A region grows children the first time it needs
//! more detail and loses them as soon as it does not, so redrawing after a rotation only walks the
//! tree it already has.
//!
//! # Using Tetrix
//!
//! ## Implementing the [`Surface`](surface::Surface) trait
//!
//! The renderer only needs to fill closed paths and clear rectangles:
//!
//! ```
//! # use tetrix::prelude::*;
//! # use kurbo::{BezPath, Rect};
//! # use peniko::Color;
//! #
//! struct Canvas {
//!     triangles: usize,
//! //  ...
//! }
//!
//! impl Surface for Canvas {
//!     fn fill_path(&mut self, path: &BezPath, colour: Color) {
//!         self.triangles += 1;
//!     }
//!
//!     fn clear_rect(&mut self, rect: Rect) {
//!         self.triangles = 0;
//!     }
//! }
//! ```
//!
//! ## Setting up the scene
//!
//! A [`Scene`](scene::Scene) is built once from a [`Config`](config::Config) and the size of the
//! drawing area. The configuration selects the [`Mode`](config::Mode) and overrides any of the
//! default constants.
//!
//! ```
//! # use tetrix::prelude::*;
//! let config = Config {
//!     anaglyph: true,
//!     ..Config::default()
//! };
//!
//! let scene = Scene::new(&config, Viewport::new(1280.0, 720.0, 2.0)).unwrap();
//! assert_eq!(scene.cameras().len(), 2);
//! ```
//!
//! ## Drawing and rotating
//!
//! Draw the first frame with [`render`](scene::Scene::render), then forward every wheel event to
//! [`scroll`](scene::Scene::scroll), which turns the fractal and redraws it.
//!
//! ```
//! # use tetrix::prelude::*;
//! let mut scene = Scene::new(&Config::default(), Viewport::new(1280.0, 720.0, 1.0)).unwrap();
//! let mut surface = Recorder::default();
//!
//! scene.render(&mut surface);
//!
//! let stats = scene.scroll(&mut surface, ScrollDelta::new(12.0, -4.0)).unwrap();
//! assert_eq!(stats.faces, surface.fills().len());
//! ```
//!
//! On `wasm32`, the `web` module provides a canvas [`Surface`](surface::Surface) and a `start`
//! function doing all of the above in a browser window.

#![warn(missing_docs)]

/// Configuration of a scene.
pub mod config;

/// Errors raised while validating inputs.
pub mod error;

/// Regular tetrahedra.
pub mod pyramid;

/// Scene composition: cameras, stereo modes and scroll handling.
pub mod scene;

/// The drawing surface the renderer rasterizes onto.
pub mod surface;

/// Lazy subdivision tree.
pub mod tree;

/// Points rotating around a centre.
pub mod vector;

/// Browser host.
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{Error, Result};

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::config::{Config, Mode, Viewport};
    pub use crate::pyramid::Pyramid;
    pub use crate::scene::{Camera, FrameStats, Scene, ScrollDelta};
    pub use crate::surface::{Recorder, Surface};
    pub use crate::tree::{DrawContext, Tree, TreeNode};
    pub use crate::vector::Vector;
}
