use thiserror::Error;

/// Errors raised while validating what the host hands to a [`Scene`](crate::scene::Scene).
///
/// The geometry itself never fails; these only guard the boundary so that non-finite or
/// degenerate values never reach it.
#[derive(Debug, Error)]
pub enum Error {
    /// A length that must be finite and strictly positive was not.
    #[error("{name} must be finite and greater than zero, got {value}")]
    InvalidLength {
        /// Name of the offending setting.
        name: &'static str,
        /// Value that was rejected.
        value: f64,
    },

    /// An angle that must be finite was not.
    #[error("{name} must be finite, got {value}")]
    InvalidAngle {
        /// Name of the offending setting.
        name: &'static str,
        /// Value that was rejected.
        value: f64,
    },

    /// A colour string could not be parsed.
    #[error("invalid colour {value:?}: {reason}")]
    InvalidColour {
        /// The colour string as configured.
        value: String,
        /// Why the parser rejected it.
        reason: String,
    },

    /// A scroll event carried a NaN or infinite delta.
    #[error("scroll delta ({delta_x}, {delta_y}) is not finite")]
    NonFiniteScroll {
        /// Horizontal delta of the rejected event.
        delta_x: f64,
        /// Vertical delta of the rejected event.
        delta_y: f64,
    },

    /// A finite scroll event would turn a tree by an infinite angle.
    #[error("scroll delta ({delta_x}, {delta_y}) overflows the accumulated rotation")]
    RotationOverflow {
        /// Horizontal delta of the rejected event.
        delta_x: f64,
        /// Vertical delta of the rejected event.
        delta_y: f64,
    },

    /// Reaching the leaf threshold from the fractal side takes too many subdivisions.
    #[error("side {side} needs more than {max_depth} subdivisions to reach min_side {min_side}")]
    TooDeep {
        /// Side of the whole fractal.
        side: f64,
        /// Leaf threshold.
        min_side: f64,
        /// Deepest subdivision allowed.
        max_depth: u32,
    },

    /// The configuration text is not valid JSON for a [`Config`](crate::config::Config).
    #[error("malformed configuration")]
    Json(#[from] serde_json::Error),
}

/// Result type of fallible operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn length(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidLength { name, value })
    }
}

pub(crate) fn angle(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidAngle { name, value })
    }
}

/// Number of halvings from `side` down to at most `min_side`, the height the tree will reach.
pub(crate) fn depth(side: f64, min_side: f64, max_depth: u32) -> Result<u32> {
    let mut depth = 0;
    let mut current = side;
    while current > min_side {
        if depth == max_depth {
            return Err(Error::TooDeep {
                side,
                min_side,
                max_depth,
            });
        }
        current /= 2.0;
        depth += 1;
    }
    Ok(depth)
}
