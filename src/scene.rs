use glam::DVec3;
use peniko::Color;

use crate::{
    config::{parse_colour, Config, Mode, Viewport},
    error::{self, Error, Result},
    surface::Surface,
    tree::Tree,
};

/// A wheel event, in the host's scroll units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollDelta {
    /// Horizontal scroll, turning the fractal around the Y axis.
    pub delta_x: f64,
    /// Vertical scroll, turning the fractal around the X axis.
    pub delta_y: f64,
}

impl ScrollDelta {
    /// Creates a new [`ScrollDelta`].
    #[inline]
    pub const fn new(delta_x: f64, delta_y: f64) -> Self {
        Self { delta_x, delta_y }
    }
}

/// Counts gathered while drawing one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of trees drawn.
    pub trees: usize,
    /// Leaf pyramids rasterized, over all trees.
    pub leaves: usize,
    /// Triangles filled, over all trees.
    pub faces: usize,
}

/// One eye of the scene: a [`Tree`] and where it is drawn.
#[derive(Clone, Debug)]
pub struct Camera {
    offset: f64,
    centre: DVec3,
    tree: Tree,
}

impl Camera {
    /// Horizontal distance from the viewport centre, in pixels.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Centre of the fractal, which is also its rotation centre.
    #[inline]
    pub fn centre(&self) -> DVec3 {
        self.centre
    }

    /// The tree drawn by this camera.
    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

/// The fractal as seen by one or two cameras, rotated by scroll events.
///
/// ```
/// # use tetrix::prelude::*;
/// let config = Config { real_3d: true, ..Config::default() };
/// let mut scene = Scene::new(&config, Viewport::new(800.0, 600.0, 1.0)).unwrap();
/// let mut recorder = Recorder::default();
///
/// let stats = scene.render(&mut recorder);
/// assert_eq!(stats.trees, 2);
///
/// scene.scroll(&mut recorder, ScrollDelta::new(360.0, 0.0)).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Scene {
    mode: Mode,
    viewport: Viewport,
    side: f64,
    rotation_per_unit: f64,
    cameras: Vec<Camera>,
}

impl Scene {
    /// Builds the scene described by `config` for the given viewport.
    ///
    /// Lengths must be finite and positive, angles finite and colours valid CSS colours. Reaching
    /// `min_side` from `side` must take at most `max_depth` subdivisions.
    pub fn new(config: &Config, viewport: Viewport) -> Result<Self> {
        let viewport = viewport.validate()?;
        let mode = config.mode();

        let side = error::length("side", config.side(&viewport))?;
        let min_side = error::length("min_side", config.min_side())?;
        let rotation_per_unit = error::angle("rotation_per_unit", config.rotation_per_unit)?;
        let depth = error::depth(side, min_side, config.max_depth)?;

        let centre = viewport.centre();
        let camera = |offset: f64, colour: Color, parallax: f64| Camera {
            offset,
            centre: centre + DVec3::X * offset,
            tree: Tree::with_rotation(colour, min_side, DVec3::new(0.0, parallax, 0.0)),
        };

        let cameras = match mode {
            Mode::Mono => vec![camera(0.0, parse_colour(&config.fill_colour)?, 0.0)],
            Mode::Real3d | Mode::Anaglyph => {
                let parallax = error::angle("parallax", config.parallax)?;

                let (half, colours) = if mode == Mode::Anaglyph {
                    let [left, right] = &config.anaglyph_colours;
                    (0.0, [parse_colour(left)?, parse_colour(right)?])
                } else {
                    let separation = error::length("camera_separation", config.separation())?;
                    (separation / 2.0, [parse_colour(&config.fill_colour)?; 2])
                };

                vec![
                    camera(-half, colours[0], -parallax),
                    camera(half, colours[1], parallax),
                ]
            }
        };

        log::debug!(
            "{mode:?} scene: side {side}, leaf threshold {min_side} (depth {depth}), \
             {} camera(s) around {centre}",
            cameras.len()
        );

        Ok(Self {
            mode,
            viewport,
            side,
            rotation_per_unit,
            cameras,
        })
    }

    /// The presentation mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The viewport the scene was built for.
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Side of each fractal.
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// The cameras, left first.
    #[inline]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Rotation delta, in radians, caused by a scroll event.
    ///
    /// Vertical scroll turns around the X axis and horizontal scroll around the Y axis.
    #[inline]
    pub fn rotation_delta(&self, delta: ScrollDelta) -> DVec3 {
        DVec3::new(
            self.rotation_per_unit * delta.delta_y,
            self.rotation_per_unit * delta.delta_x,
            0.0,
        )
    }

    /// Clears the viewport and draws every camera without changing its rotation.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        self.frame(surface, DVec3::ZERO)
    }

    /// Turns every camera by the rotation the scroll event amounts to, then clears the viewport
    /// and redraws.
    ///
    /// Events with a non-finite delta, or whose rotation would overflow the angle accumulated by any
    /// tree, are rejected and leave the scene untouched.
    pub fn scroll<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        delta: ScrollDelta,
    ) -> Result<FrameStats> {
        if !(delta.delta_x.is_finite() && delta.delta_y.is_finite()) {
            log::warn!("ignoring scroll event {delta:?}");
            return Err(Error::NonFiniteScroll {
                delta_x: delta.delta_x,
                delta_y: delta.delta_y,
            });
        }

        let rotation = self.rotation_delta(delta);
        let overflows = !rotation.is_finite()
            || self
                .cameras
                .iter()
                .any(|camera| !(camera.tree.rotation() + rotation).is_finite());
        if overflows {
            log::warn!("ignoring scroll event {delta:?}: rotation overflows");
            return Err(Error::RotationOverflow {
                delta_x: delta.delta_x,
                delta_y: delta.delta_y,
            });
        }

        Ok(self.frame(surface, rotation))
    }

    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, rotation: DVec3) -> FrameStats {
        surface.clear_rect(self.viewport.bounds());

        let mut stats = FrameStats::default();
        for camera in &mut self.cameras {
            let leaves = camera.tree.draw(surface, self.side, camera.centre, rotation);

            stats.trees += 1;
            stats.leaves += leaves;
            stats.faces += 4 * leaves;
        }

        log::trace!("frame: {stats:?}");
        stats
    }
}
