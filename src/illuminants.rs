//! This module provides enums for the CIE standard illuminants and standard observers supported by
//! the crate, as well as the table of white point values for each illuminant at both observer
//! angles. The values follow ASTM E308 and are normalized so that the Y (luminance) value is 1.
//! Names are matched case-insensitively when parsed, and only ever at that boundary: inside the
//! crate every tag is one of these closed enums.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A listing of the supported CIE standard illuminants, standards that describe a particular set of
/// lighting conditions. The most common ones for computers are D50 and D65, differing kinds of
/// daylight; A is incandescent light, and the F series are fluorescent lamps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Illuminant {
    /// Incandescent (tungsten) light, 2856 K.
    A,
    /// Obsolete direct-sunlight simulator.
    B,
    /// Obsolete average-daylight simulator.
    C,
    /// Horizon daylight, 5003 K. The default illuminant for every color.
    D50,
    /// Mid-morning daylight, 5503 K.
    D55,
    /// Noon daylight, 6504 K.
    D65,
    /// North sky daylight, 7504 K.
    D75,
    /// Equal-energy radiator.
    E,
    /// Cool white fluorescent.
    F2,
    /// Broadband daylight fluorescent.
    F7,
    /// Narrow tri-band fluorescent.
    F11,
}

/// An array of illuminants, in the same order as below and in the white point tables.
pub static ILLUMINANTS: [Illuminant; 11] = [
    Illuminant::A,
    Illuminant::B,
    Illuminant::C,
    Illuminant::D50,
    Illuminant::D55,
    Illuminant::D65,
    Illuminant::D75,
    Illuminant::E,
    Illuminant::F2,
    Illuminant::F7,
    Illuminant::F11,
];

/// White points for the CIE 1931 2° observer, in the order of [`ILLUMINANTS`].
pub static WHITE_POINTS_2: [[f64; 3]; 11] = [
    [1.09850, 1.00000, 0.35585],
    [0.99072, 1.00000, 0.85223],
    [0.98074, 1.00000, 1.18232],
    [0.96422, 1.00000, 0.82521],
    [0.95682, 1.00000, 0.92149],
    [0.95047, 1.00000, 1.08883],
    [0.94972, 1.00000, 1.22638],
    [1.00000, 1.00000, 1.00000],
    [0.99186, 1.00000, 0.67393],
    [0.95041, 1.00000, 1.08747],
    [1.00962, 1.00000, 0.64350],
];

/// White points for the CIE 1964 10° observer, in the order of [`ILLUMINANTS`].
pub static WHITE_POINTS_10: [[f64; 3]; 11] = [
    [1.11144, 1.00000, 0.35200],
    [0.99178, 1.00000, 0.84349],
    [0.97285, 1.00000, 1.16145],
    [0.96720, 1.00000, 0.81427],
    [0.95799, 1.00000, 0.90926],
    [0.94811, 1.00000, 1.07304],
    [0.94416, 1.00000, 1.20641],
    [1.00000, 1.00000, 1.00000],
    [1.03279, 1.00000, 0.69027],
    [0.95792, 1.00000, 1.07686],
    [1.03863, 1.00000, 0.65607],
];

impl Illuminant {
    /// The position of this illuminant in [`ILLUMINANTS`] and the white point tables.
    pub fn index(self) -> usize {
        match self {
            Illuminant::A => 0,
            Illuminant::B => 1,
            Illuminant::C => 2,
            Illuminant::D50 => 3,
            Illuminant::D55 => 4,
            Illuminant::D65 => 5,
            Illuminant::D75 => 6,
            Illuminant::E => 7,
            Illuminant::F2 => 8,
            Illuminant::F7 => 9,
            Illuminant::F11 => 10,
        }
    }

    /// The lowercase canonical name, as accepted by `parse`.
    pub fn name(self) -> &'static str {
        match self {
            Illuminant::A => "a",
            Illuminant::B => "b",
            Illuminant::C => "c",
            Illuminant::D50 => "d50",
            Illuminant::D55 => "d55",
            Illuminant::D65 => "d65",
            Illuminant::D75 => "d75",
            Illuminant::E => "e",
            Illuminant::F2 => "f2",
            Illuminant::F7 => "f7",
            Illuminant::F11 => "f11",
        }
    }

    /// Gets the tabulated XYZ white point of the illuminant for a given observer, with Y = 1.
    pub fn white_point(self, observer: Observer) -> [f64; 3] {
        match observer {
            Observer::Two => WHITE_POINTS_2[self.index()],
            Observer::Ten => WHITE_POINTS_10[self.index()],
        }
    }
}

impl Default for Illuminant {
    fn default() -> Illuminant {
        Illuminant::D50
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Illuminant, ColorError> {
        let lowered = s.trim().to_lowercase();
        ILLUMINANTS
            .iter()
            .copied()
            .find(|illuminant| illuminant.name() == lowered)
            .ok_or_else(|| ColorError::InvalidIlluminant {
                illuminant: s.to_string(),
                observer: "any".to_string(),
            })
    }
}

impl TryFrom<String> for Illuminant {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Illuminant, ColorError> {
        s.parse()
    }
}

/// The CIE standard observer: the field-of-view assumption behind a set of color matching
/// functions. Only the two standardized angles exist, so anything else is unrepresentable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Observer {
    /// The CIE 1931 2° observer. The default.
    Two,
    /// The CIE 1964 10° observer.
    Ten,
}

impl Observer {
    /// The angle as displayed, with a degree sign.
    pub fn name(self) -> &'static str {
        match self {
            Observer::Two => "2°",
            Observer::Ten => "10°",
        }
    }
}

impl Default for Observer {
    fn default() -> Observer {
        Observer::Two
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Observer {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Observer, ColorError> {
        let lowered = s.trim().to_lowercase();
        let angle = lowered
            .trim_end_matches('°')
            .trim_end_matches("deg")
            .trim();
        match angle {
            "2" => Ok(Observer::Two),
            "10" => Ok(Observer::Ten),
            _ => Err(ColorError::InvalidObserver(s.to_string())),
        }
    }
}

impl TryFrom<String> for Observer {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Observer, ColorError> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_illuminant_parsing_ignores_case() {
        assert_eq!("D65".parse::<Illuminant>().unwrap(), Illuminant::D65);
        assert_eq!("d65".parse::<Illuminant>().unwrap(), Illuminant::D65);
        assert_eq!(" f11 ".parse::<Illuminant>().unwrap(), Illuminant::F11);
        match "d93".parse::<Illuminant>() {
            Err(ColorError::InvalidIlluminant { illuminant, .. }) => assert_eq!(illuminant, "d93"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_observer_parsing() {
        assert_eq!("2".parse::<Observer>().unwrap(), Observer::Two);
        assert_eq!("2°".parse::<Observer>().unwrap(), Observer::Two);
        assert_eq!("10deg".parse::<Observer>().unwrap(), Observer::Ten);
        assert_eq!("10°".parse::<Observer>().unwrap(), Observer::Ten);
        assert_eq!(
            "4".parse::<Observer>(),
            Err(ColorError::InvalidObserver("4".to_string()))
        );
    }

    #[test]
    fn test_white_points_are_normalized() {
        for illuminant in ILLUMINANTS.iter() {
            assert_eq!(illuminant.white_point(Observer::Two)[1], 1.0);
            assert_eq!(illuminant.white_point(Observer::Ten)[1], 1.0);
        }
        assert_eq!(
            Illuminant::D65.white_point(Observer::Two),
            [0.95047, 1.0, 1.08883]
        );
    }

    #[test]
    fn test_names_round_trip() {
        for illuminant in ILLUMINANTS.iter() {
            assert_eq!(illuminant.name().parse::<Illuminant>().unwrap(), *illuminant);
        }
    }
}
