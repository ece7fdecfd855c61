use glam::DVec3;
use kurbo::BezPath;
use peniko::Color;

use crate::{surface::Surface, vector::Vector};

/// `sqrt(1/24)`, height of the base centroid below the tetrahedron centre.
pub const BASE_DROP: f64 = 0.204_124_145_231_931_5;
/// `sqrt(3/8)`, height of the apex above the tetrahedron centre.
pub const APEX_RISE: f64 = 0.612_372_435_695_794_5;
/// `sqrt(1/12)`, depth of the front edge behind the centre.
pub const EDGE_DEPTH: f64 = 0.288_675_134_594_812_87;
/// `sqrt(1/3)`, depth of the rear base vertex in front of the centre.
pub const VERTEX_DEPTH: f64 = 0.577_350_269_189_625_7;

/// A regular tetrahedron described by its four vertices.
///
/// Pyramids are cheap and short-lived: they are rebuilt from `(side, centre)` on every draw and
/// only mutated through [`move_centre_to`](Pyramid::move_centre_to) and
/// [`rotate`](Pyramid::rotate).
///
/// ```
/// # use tetrix::prelude::*;
/// # use glam::DVec3;
/// let pyramid = Pyramid::new(2.0, DVec3::ZERO);
/// let [a, b, ..] = pyramid.vertices();
///
/// assert!((a.position.distance(b.position) - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pyramid {
    vertices: [Vector; 4],
}

impl Pyramid {
    /// Creates a regular tetrahedron with the given side length and centroid.
    ///
    /// Every vertex rotates around `centre` until [`move_centre_to`](Pyramid::move_centre_to) is
    /// called. `side` is expected to be strictly positive.
    #[inline]
    pub fn new(side: f64, centre: DVec3) -> Self {
        let half = side / 2.0;
        let (l1, l2, l3, l4) = (
            side * BASE_DROP,
            side * APEX_RISE,
            side * EDGE_DEPTH,
            side * VERTEX_DEPTH,
        );

        let vertices = [
            DVec3::new(-half, -l1, -l3),
            DVec3::new(half, -l1, -l3),
            DVec3::new(0.0, -l1, l4),
            DVec3::new(0.0, l2, 0.0),
        ]
        .map(|offset| Vector::new(centre, centre + offset));

        Self { vertices }
    }

    /// The four vertices, base first and apex last.
    #[inline]
    pub fn vertices(&self) -> &[Vector; 4] {
        &self.vertices
    }

    /// Moves the rotation centre of every vertex to `centre`, leaving the geometry in place.
    #[inline]
    pub fn move_centre_to(&mut self, centre: DVec3) -> &mut Self {
        for vertex in &mut self.vertices {
            vertex.move_centre_to(centre);
        }
        self
    }

    /// Rotates every vertex around its centre. See [`Vector::rotate`].
    #[inline]
    #[cfg(not(feature = "simd"))]
    pub fn rotate(&mut self, rotation: DVec3) -> &mut Self {
        for vertex in &mut self.vertices {
            vertex.rotate(rotation);
        }
        self
    }

    /// Rotates every vertex around its centre. See [`Vector::rotate`].
    #[inline]
    #[cfg(feature = "simd")]
    pub fn rotate(&mut self, rotation: DVec3) -> &mut Self {
        use wide::f64x4;

        let lanes = |f: fn(&Vector) -> [f64; 3]| {
            let [a, b, c, d] = self.vertices.each_ref().map(f);
            [0, 1, 2].map(|i| f64x4::from([a[i], b[i], c[i], d[i]]))
        };
        let centre = lanes(|v| v.centre.to_array());
        let mut position = lanes(|v| v.position.to_array());

        for (axis, theta) in rotation.to_array().into_iter().enumerate() {
            let (j, k) = ((axis + 1) % 3, (axis + 2) % 3);
            let (sin, cos) = theta.sin_cos();
            let (sin, cos) = (f64x4::splat(sin), f64x4::splat(cos));

            let a = position[j] - centre[j];
            let b = position[k] - centre[k];

            position[j] = centre[j] + (a * cos - b * sin);
            position[k] = centre[k] + (a * sin + b * cos);
        }

        let [x, y, z] = position.map(f64x4::to_array);
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.position = DVec3::new(x[i], y[i], z[i]);
        }
        self
    }

    /// The four triangular faces projected onto the xy plane.
    ///
    /// Face `i` joins vertices `i`, `i + 1` and `i + 2` (modulo 4); the z component is dropped.
    pub fn faces(&self) -> [BezPath; 4] {
        std::array::from_fn(|i| {
            let [a, b, c] = [i, i + 1, i + 2].map(|n| {
                let p = self.vertices[n % 4].position;
                (p.x, p.y)
            });

            let mut path = BezPath::new();
            path.move_to(a);
            path.line_to(b);
            path.line_to(c);
            path.close_path();
            path
        })
    }

    /// Fills the four faces on the surface.
    ///
    /// Faces overlap, so a translucent colour is what makes the depth readable.
    #[inline]
    pub fn rasterize<S: Surface + ?Sized>(&self, surface: &mut S, colour: Color) {
        for face in self.faces() {
            surface.fill_path(&face, colour);
        }
    }
}
