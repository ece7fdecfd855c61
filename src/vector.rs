use glam::DVec3;

/// A point in space tied to the centre it is rotated around.
///
/// Rotations are always performed relative to the current [`centre`](Vector::centre), never
/// the origin. Moving the centre with [`move_centre_to`](Vector::move_centre_to) shifts the pivot
/// but leaves the point where it is.
///
/// ```
/// # use tetrix::prelude::*;
/// # use glam::DVec3;
/// let mut vector = Vector::new(DVec3::ZERO, DVec3::X);
/// vector.rotate(DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
///
/// assert!(vector.position.abs_diff_eq(DVec3::Y, 1e-12));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    /// Centre of rotation.
    pub centre: DVec3,
    /// Absolute position of the point.
    pub position: DVec3,
}

impl Vector {
    /// Creates a new [`Vector`] at `position` rotating around `centre`.
    #[inline]
    pub const fn new(centre: DVec3, position: DVec3) -> Self {
        Self { centre, position }
    }

    /// Reassigns the rotation centre without moving the point.
    #[inline]
    pub fn move_centre_to(&mut self, centre: DVec3) -> &mut Self {
        self.centre = centre;
        self
    }

    /// Rotates the point around its centre by the given angles, in radians.
    ///
    /// This is not a single rotation matrix but three planar rotations applied one after the
    /// other: `rotation.x` turns the (y, z) pair, then `rotation.y` turns the (z, x) pair, then
    /// `rotation.z` turns the (x, y) pair. Each step uses the result of the previous one, so the
    /// order matters and a sequence of calls is not equivalent to a single call with the summed
    /// angles.
    #[inline]
    pub fn rotate(&mut self, rotation: DVec3) -> &mut Self {
        let centre = self.centre.to_array();
        let mut position = self.position.to_array();

        for (axis, theta) in rotation.to_array().into_iter().enumerate() {
            let (j, k) = ((axis + 1) % 3, (axis + 2) % 3);
            let (a, b) = turn(theta, position[j] - centre[j], position[k] - centre[k]);

            position[j] = centre[j] + a;
            position[k] = centre[k] + b;
        }

        self.position = DVec3::from_array(position);
        self
    }
}

/// Planar rotation of the offset `(a, b)` by `theta`.
#[inline]
pub(crate) fn turn(theta: f64, a: f64, b: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPSILON: f64 = 1e-9;

    fn random_vector(rng: &mut StdRng) -> Vector {
        let mut gen = || DVec3::from_array([0.0; 3].map(|_| rng.gen_range(-500.0..500.0)));
        Vector::new(gen(), gen())
    }

    #[test]
    fn full_turn_on_each_axis_is_identity() {
        let mut rng = StdRng::seed_from_u64(0x7e7);

        for _ in 0..64 {
            let original = random_vector(&mut rng);

            for axis in [DVec3::X, DVec3::Y, DVec3::Z] {
                let mut vector = original;
                vector.rotate(axis * TAU);

                assert!(
                    vector.position.abs_diff_eq(original.position, EPSILON),
                    "{:?} turned by 2π around {axis} gave {:?}",
                    original.position,
                    vector.position
                );
                assert_eq!(vector.centre, original.centre);
            }
        }
    }

    #[test]
    fn axes_turn_expected_pairs() {
        let centre = DVec3::new(1.0, 2.0, 3.0);

        // x turns y towards z
        let mut vector = Vector::new(centre, centre + DVec3::Y);
        vector.rotate(DVec3::new(FRAC_PI_2, 0.0, 0.0));
        assert!(vector.position.abs_diff_eq(centre + DVec3::Z, EPSILON));

        // y turns z towards x
        let mut vector = Vector::new(centre, centre + DVec3::Z);
        vector.rotate(DVec3::new(0.0, FRAC_PI_2, 0.0));
        assert!(vector.position.abs_diff_eq(centre + DVec3::X, EPSILON));

        // z turns x towards y
        let mut vector = Vector::new(centre, centre + DVec3::X);
        vector.rotate(DVec3::new(0.0, 0.0, FRAC_PI_2));
        assert!(vector.position.abs_diff_eq(centre + DVec3::Y, EPSILON));
    }

    #[test]
    fn axes_are_applied_in_order() {
        let mut vector = Vector::new(DVec3::ZERO, DVec3::Y);
        vector.rotate(DVec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));

        // y -> z under the x step, then z -> x under the y step.
        assert!(vector.position.abs_diff_eq(DVec3::X, EPSILON));

        let mut reversed = Vector::new(DVec3::ZERO, DVec3::Y);
        reversed.rotate(DVec3::new(0.0, FRAC_PI_2, 0.0));
        reversed.rotate(DVec3::new(FRAC_PI_2, 0.0, 0.0));

        assert!(reversed.position.abs_diff_eq(DVec3::Z, EPSILON));
    }

    #[test]
    fn rotation_is_relative_to_centre() {
        let mut vector = Vector::new(DVec3::new(10.0, 0.0, 0.0), DVec3::new(12.0, 0.0, 0.0));
        vector.rotate(DVec3::new(0.0, 0.0, PI));

        assert!(vector.position.abs_diff_eq(DVec3::new(8.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn moving_centre_keeps_position() {
        let mut vector = Vector::new(DVec3::ZERO, DVec3::ONE);
        vector.move_centre_to(DVec3::splat(4.0));

        assert_eq!(vector.position, DVec3::ONE);
        assert_eq!(vector.centre, DVec3::splat(4.0));
    }
}
