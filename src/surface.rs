use kurbo::{BezPath, Rect};
use peniko::Color;

/// A 2D drawing surface the renderer rasterizes onto.
///
/// This is the only capability the renderer needs from its host: filling a closed polygon with a
/// solid colour and clearing a rectangular region. Coordinates are logical pixels; surfaces whose
/// addressable resolution differs from the logical size are expected to apply their own scale.
pub trait Surface {
    /// Fills the closed path with a solid colour.
    fn fill_path(&mut self, path: &BezPath, colour: Color);

    /// Clears every pixel inside `rect`.
    fn clear_rect(&mut self, rect: Rect);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn fill_path(&mut self, path: &BezPath, colour: Color) {
        (**self).fill_path(path, colour);
    }

    #[inline]
    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    #[inline]
    fn fill_path(&mut self, path: &BezPath, colour: Color) {
        (**self).fill_path(path, colour);
    }

    #[inline]
    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }
}

/// A [`Surface`] that keeps every fill issued since the last clear.
///
/// Useful to inspect a frame without a real canvas.
///
/// ```
/// # use tetrix::prelude::*;
/// # use glam::DVec3;
/// let mut recorder = Recorder::default();
/// Pyramid::new(10.0, DVec3::ZERO).rasterize(&mut recorder, peniko::Color::BLACK);
///
/// assert_eq!(recorder.fills().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    fills: Vec<(BezPath, Color)>,
    clears: Vec<Rect>,
}

impl Recorder {
    /// Creates an empty [`Recorder`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths filled since the last clear, in drawing order.
    #[inline]
    pub fn fills(&self) -> &[(BezPath, Color)] {
        &self.fills
    }

    /// Every rectangle cleared so far.
    #[inline]
    pub fn clears(&self) -> &[Rect] {
        &self.clears
    }
}

impl Surface for Recorder {
    #[inline]
    fn fill_path(&mut self, path: &BezPath, colour: Color) {
        self.fills.push((path.clone(), colour));
    }

    #[inline]
    fn clear_rect(&mut self, rect: Rect) {
        self.fills.clear();
        self.clears.push(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Config, Viewport},
        pyramid::Pyramid,
        scene::Scene,
    };
    use glam::DVec3;

    #[test]
    fn boxed_surfaces() {
        let pyramid = Pyramid::new(10.0, DVec3::ZERO);

        let mut boxed = Box::new(Recorder::new());
        pyramid.rasterize(&mut boxed, Color::BLACK);
        boxed.clear_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        pyramid.rasterize(&mut boxed, Color::WHITE);

        assert_eq!(boxed.fills().len(), 4);
        assert_eq!(boxed.clears().len(), 1);

        let mut surface: Box<dyn Surface> = boxed;
        let mut scene = Scene::new(&Config::default(), Viewport::new(1920.0, 1080.0, 1.0))
            .expect("valid scene");

        let stats = scene.render(&mut surface);
        assert_eq!(stats.faces, 4096);
    }
}
