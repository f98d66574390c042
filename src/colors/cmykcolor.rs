//! CMYK: CMY with the common gray component pulled out into a separate black (key) ink.

use crate::colors::CMYColor;

/// A color as cyan, magenta, yellow, and black ink amounts, each from 0 to 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan.
    pub c: f64,
    /// Magenta.
    pub m: f64,
    /// Yellow.
    pub y: f64,
    /// Black, the key ink.
    pub k: f64,
}

impl CMYKColor {
    /// Extracts the black component: K is the smallest of the three inks, and each ink is rescaled
    /// to the range left once K is laid down. Pure black is all key ink.
    pub fn from_cmy(cmy: CMYColor) -> CMYKColor {
        let k = cmy.c.min(cmy.m).min(cmy.y);
        if k == 1.0 {
            return CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k,
            };
        }
        CMYKColor {
            c: (cmy.c - k) / (1.0 - k),
            m: (cmy.m - k) / (1.0 - k),
            y: (cmy.y - k) / (1.0 - k),
            k,
        }
    }

    /// Folds the black component back into the three inks.
    pub fn to_cmy(&self) -> CMYColor {
        CMYColor {
            c: self.c * (1.0 - self.k) + self.k,
            m: self.m * (1.0 - self.k) + self.k,
            y: self.y * (1.0 - self.k) + self.k,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cmyk_cmy_round_trip() {
        let cmy = CMYColor {
            c: 0.3,
            m: 0.5,
            y: 0.9,
        };
        let cmyk = CMYKColor::from_cmy(cmy);
        assert!((cmyk.k - 0.3).abs() <= 1e-12);
        assert!(cmyk.c.abs() <= 1e-12);
        assert!((cmyk.m - 0.2 / 0.7).abs() <= 1e-12);
        let back = cmyk.to_cmy();
        assert!((back.c - cmy.c).abs() <= 1e-12);
        assert!((back.m - cmy.m).abs() <= 1e-12);
        assert!((back.y - cmy.y).abs() <= 1e-12);
    }

    #[test]
    fn test_pure_black() {
        let black = CMYKColor::from_cmy(CMYColor {
            c: 1.0,
            m: 1.0,
            y: 1.0,
        });
        assert_eq!(
            black,
            CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0
            }
        );
        let cmy = black.to_cmy();
        assert_eq!((cmy.c, cmy.m, cmy.y), (1.0, 1.0, 1.0));
    }
}
