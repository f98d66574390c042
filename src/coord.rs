//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Used to unify math
//! with colors that is the same, just with different projections into 3D space.

use std::ops::{Add, Div, Mul, Sub};

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. Supports many common arithmetic operations on points.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any different in any method of
/// `Coord`, so the distinction between them is completely conventional. Any color with three
/// coordinates converts to and from a `Coord` by matching its components with these axes in the
/// order of the letters in its name: for example, `CIELABColor` maps to a coordinate such that `l`
/// is on the x-axis, `a` is on the y-axis, and `b` is on the z-axis.
///
/// # Examples
/// ## Basic Operations
/// ```
/// # use tristimulus::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// // Add two points together to do componentwise addition.
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// // Subtract two points the same way.
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // Scalars multiply and divide from the right.
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// assert_eq!(quot, Coord{x: 0.5, y: 4., z: 3.5});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// For any Coords c1, c2, and c3, c1 + c2 = c3 implies c3 - c2 = c1 and c3 - c1 = c2, down to
/// floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication and division: (a, b, c) * s = (sa, sb, sc), and similarly for division
// a scalar that doesn't fit in an f64 poisons the result with NaN instead of panicking
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. In CIELAB this is exactly the CIE 1976 color difference;
    /// in every other space it is a poor analogue of perceptual difference, and the Delta E
    /// formulas in [`delta_e`](crate::delta_e) should be used instead.
    /// # Example
    /// ```
    /// # use tristimulus::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}
