//! This module describes the Bound trait, which allows for a description of what values a color
//! representation supports. For example, an encoded RGB channel only makes sense between 0 and 255,
//! whereas CIELAB can describe even those colors that cannot be viewed by humans and so has no
//! bounds at all.

use crate::coord::Coord;

/// Describes a color representation in which the total space of representable colors has explicit
/// bounds besides those imposed by human vision. This only applies to colors that can be embedded
/// in 3D space, hence the conversions to and from [`Coord`].
/// # Example
/// Bound a clearly-problematic color within RGB.
///
/// ```
/// # use tristimulus::bound::Bound;
/// # use tristimulus::colors::RGBColor;
/// let out_of_bounds = RGBColor{r: 300., g: -20., b: 128.5};
/// let in_bounds = out_of_bounds.clamp();
/// assert_eq!(in_bounds, RGBColor{r: 255., g: 0., b: 128.5});
/// ```
pub trait Bound: Sized + Into<Coord> + From<Coord> {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. If
    /// some parts of the bounds don't exist, using infinity or negative infinity works.
    fn bounds() -> [(f64, f64); 3];

    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. See trait documentation for example usage.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let mut point_vals = [0.; 3];
        for i in 0..3 {
            let component = [point.x, point.y, point.z][i];
            let (min, max) = ranges[i];
            point_vals[i] = if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            };
        }
        Coord {
            x: point_vals[0],
            y: point_vals[1],
            z: point_vals[2],
        }
    }

    /// Returns a copy of the color with every component moved inside the bounds. Colors that are
    /// already in bounds are returned unchanged.
    fn clamp(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }

    /// Whether every component already lies inside the bounds.
    fn in_bounds(self) -> bool {
        let point: Coord = self.into();
        let ranges = Self::bounds();
        [point.x, point.y, point.z]
            .iter()
            .zip(ranges.iter())
            .all(|(&c, &(min, max))| c >= min && c <= max)
    }
}
