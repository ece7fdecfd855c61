/// Nodes of the subdivision tree and the per-descent drawing context.
pub mod node;

use glam::DVec3;
use peniko::Color;

pub use node::*;

use crate::surface::Surface;

/// Node that can either be internal and own its children or external and own nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Node<N> {
    /// Node with child nodes.
    Internal(N),
    /// Node without children.
    #[default]
    External,
}

/// A Sierpinski tetrahedron seen by one camera.
///
/// The tree owns the cached subdivision of the fractal, the rotation accumulated over the whole
/// session and the colour its faces are filled with.
///
/// ```
/// # use tetrix::prelude::*;
/// # use glam::DVec3;
/// let mut tree = Tree::new(peniko::Color::WHITE, 30.0);
/// let mut recorder = Recorder::default();
///
/// let leaves = tree.draw(&mut recorder, 960.0, DVec3::new(480.0, 400.0, 0.0), DVec3::ZERO);
///
/// assert_eq!(leaves, 1024);
/// assert_eq!(recorder.fills().len(), 4096);
/// ```
#[derive(Clone, Debug)]
pub struct Tree {
    root: TreeNode,
    rotation: DVec3,
    colour: Color,
    min_side: f64,
}

impl Tree {
    /// Creates an unrotated tree.
    #[inline]
    pub fn new(colour: Color, min_side: f64) -> Self {
        Self::with_rotation(colour, min_side, DVec3::ZERO)
    }

    /// Creates a tree starting from the given rotation.
    #[inline]
    pub fn with_rotation(colour: Color, min_side: f64, rotation: DVec3) -> Self {
        Self {
            root: TreeNode::new(),
            rotation,
            colour,
            min_side,
        }
    }

    /// Root of the subdivision tree.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Rotation accumulated so far, in radians.
    #[inline]
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    /// Fill colour of the faces.
    #[inline]
    pub fn colour(&self) -> Color {
        self.colour
    }

    /// Side length at or below which regions are drawn as a single pyramid.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.min_side
    }

    /// Adds `delta` to the accumulated rotation and draws the whole fractal of side `side` centred
    /// on `centre`, returning the number of leaf pyramids rasterized.
    ///
    /// The fractal is always rotated from its unrotated pose by the accumulated total, around
    /// `centre`. Angles are not wrapped.
    pub fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        side: f64,
        centre: DVec3,
        delta: DVec3,
    ) -> usize {
        self.rotation += delta;

        let context = DrawContext {
            min_side: self.min_side,
            rotation_centre: centre,
            rotation: self.rotation,
            colour: self.colour,
        };

        let leaves = self.root.draw(surface, &context, side, centre);
        log::trace!(
            "drew {leaves} leaves at rotation {} ({} cached nodes)",
            self.rotation,
            self.root.node_count()
        );

        leaves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pyramid::Pyramid, surface::Recorder};
    use kurbo::BezPath;

    const CENTRE: DVec3 = DVec3::new(200.0, 150.0, 0.0);

    fn colour() -> Color {
        Color::from_rgba8(102, 102, 153, 128)
    }

    fn frame(tree: &mut Tree, side: f64, delta: DVec3) -> Vec<BezPath> {
        let mut recorder = Recorder::new();
        tree.draw(&mut recorder, side, CENTRE, delta);
        recorder.fills().iter().map(|(path, _)| path.clone()).collect()
    }

    fn leaf_faces(side: f64, min_side: f64, rotate: impl Fn(&mut Pyramid)) -> Vec<BezPath> {
        fn centres(side: f64, min_side: f64, centre: DVec3, out: &mut Vec<(f64, DVec3)>) {
            if side > min_side {
                for vertex in Pyramid::new(side / 2.0, centre).vertices() {
                    centres(side / 2.0, min_side, vertex.position, out);
                }
            } else {
                out.push((side, centre));
            }
        }

        let mut leaves = Vec::new();
        centres(side, min_side, CENTRE, &mut leaves);

        leaves
            .into_iter()
            .flat_map(|(side, centre)| {
                let mut pyramid = Pyramid::new(side, centre);
                pyramid.move_centre_to(CENTRE);
                rotate(&mut pyramid);
                pyramid.faces()
            })
            .collect()
    }

    #[test_log::test]
    fn accumulates_rotation() {
        let mut tree = Tree::new(colour(), 30.0);
        let mut recorder = Recorder::new();

        tree.draw(&mut recorder, 120.0, CENTRE, DVec3::new(0.1, 0.2, 0.0));
        tree.draw(&mut recorder, 120.0, CENTRE, DVec3::new(0.3, -0.5, 0.0));

        assert!(tree
            .rotation()
            .abs_diff_eq(DVec3::new(0.4, -0.3, 0.0), 1e-15));
    }

    #[test_log::test]
    fn angles_are_not_wrapped() {
        let mut tree = Tree::new(colour(), 30.0);
        let mut recorder = Recorder::new();

        for _ in 0..10 {
            tree.draw(&mut recorder, 60.0, CENTRE, DVec3::new(0.0, std::f64::consts::PI, 0.0));
        }

        assert!((tree.rotation().y - 10.0 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test_log::test]
    fn rotates_from_unrotated_pose() {
        let (d1, d2) = (DVec3::new(0.3, 0.2, 0.0), DVec3::new(0.1, 0.7, 0.4));

        let mut tree = Tree::new(colour(), 30.0);
        frame(&mut tree, 240.0, d1);
        let drawn = frame(&mut tree, 240.0, d2);

        let total = leaf_faces(240.0, 30.0, |p| {
            p.rotate(d1 + d2);
        });
        assert_eq!(drawn, total);

        // rotating the previous frame again would give a different pose
        let incremental = leaf_faces(240.0, 30.0, |p| {
            p.rotate(d1).rotate(d2);
        });
        assert_ne!(drawn, incremental);
    }

    #[test_log::test]
    fn starts_from_initial_rotation() {
        let parallax = DVec3::new(0.0, 0.04, 0.0);
        let mut tree = Tree::with_rotation(colour(), 30.0, parallax);

        let drawn = frame(&mut tree, 120.0, DVec3::ZERO);

        assert_eq!(tree.rotation(), parallax);
        assert_eq!(
            drawn,
            leaf_faces(120.0, 30.0, |p| {
                p.rotate(parallax);
            })
        );
    }

    #[test_log::test]
    fn cache_follows_side() {
        let mut tree = Tree::new(colour(), 10.0);
        let mut recorder = Recorder::new();

        assert_eq!(tree.draw(&mut recorder, 120.0, CENTRE, DVec3::ZERO), 256);
        assert_eq!(tree.root().height(), 4);

        assert_eq!(tree.draw(&mut recorder, 40.0, CENTRE, DVec3::ZERO), 16);
        assert_eq!(tree.root().height(), 2);
        assert_eq!(tree.root().node_count(), 1 + 4 + 16);
    }
}
