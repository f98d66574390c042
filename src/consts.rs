//! This file provides constants that are used for matrix multiplication and color space conversion,
//! along with a function for computing inverses. Matrices are kept as `rulinalg` matrices and their
//! inverses are computed rather than tabulated: tabulated inverses are slightly off, allowing errors
//! to creep in even when doing things that should not change the result at all, e.g., adapting to
//! an illuminant and back again.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use crate::error::{ColorError, Result};

/// The boundary between the linear near-black segment and the cube-root segment of the CIE
/// lightness function, (6/29)^3. Shared by CIELAB and CIELUV.
pub const CIE_E: f64 = 216.0 / 24389.0;

/// The slope of the linear near-black segment of the CIE lightness function, (29/3)^3.
pub const CIE_K: f64 = 24389.0 / 27.0;

/// The determinant of a 3x3 matrix, by cofactor expansion along the first row.
pub fn det3(m: &Matrix<f64>) -> f64 {
    m[[0, 0]] * (m[[1, 1]] * m[[2, 2]] - m[[1, 2]] * m[[2, 1]])
        - m[[0, 1]] * (m[[1, 0]] * m[[2, 2]] - m[[1, 2]] * m[[2, 0]])
        + m[[0, 2]] * (m[[1, 0]] * m[[2, 1]] - m[[1, 1]] * m[[2, 0]])
}

/// Inverts a 3x3 matrix, reporting a singular matrix as an error instead of panicking.
pub fn inv(m: &Matrix<f64>) -> Result<Matrix<f64>> {
    if det3(m).abs() < 1e-12 {
        return Err(ColorError::Matrix("matrix is singular".to_string()));
    }
    m.clone()
        .inverse()
        .map_err(|e| ColorError::Matrix(format!("matrix not invertible: {}", e)))
}

/// Multiplies a 3x3 matrix by a column vector given as an array.
pub fn mul3(m: &Matrix<f64>, v: [f64; 3]) -> [f64; 3] {
    let column = Vector::new(vec![v[0], v[1], v[2]]);
    let out = m * &column;
    [out[0], out[1], out[2]]
}

/// The Bradford cone-response matrix.
#[allow(non_snake_case)]
pub fn BRADFORD_TRANSFORM_MAT() -> Matrix<f64> {
    Matrix::new(
        3,
        3,
        vec![
            00.8951, 00.2664, -0.1614, //
            -0.7502, 01.7135, 00.0367, //
            00.0389, -0.0685, 01.0296,
        ],
    )
}

/// The Hunt-Pointer-Estevez cone-response matrix used by von Kries adaptation.
#[allow(non_snake_case)]
pub fn VON_KRIES_TRANSFORM_MAT() -> Matrix<f64> {
    Matrix::new(
        3,
        3,
        vec![
            00.40024, 00.70760, -0.08081, //
            -0.22630, 01.16532, 00.04570, //
            00.00000, 00.00000, 00.91822,
        ],
    )
}

/// XYZ scaling adapts the tristimulus values directly.
#[allow(non_snake_case)]
pub fn XYZ_SCALING_TRANSFORM_MAT() -> Matrix<f64> {
    Matrix::identity(3)
}

/// The cone-response model used to carry tristimulus values from one white point to another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationMethod {
    /// The Bradford transform: the default, and the best general-purpose choice.
    Bradford,
    /// The classic von Kries transform on Hunt-Pointer-Estevez cone responses.
    VonKries,
    /// Plain per-channel scaling of XYZ.
    XyzScaling,
}

impl Default for AdaptationMethod {
    fn default() -> AdaptationMethod {
        AdaptationMethod::Bradford
    }
}

impl AdaptationMethod {
    /// The cone-response matrix for this method.
    pub fn matrix(self) -> Matrix<f64> {
        match self {
            AdaptationMethod::Bradford => BRADFORD_TRANSFORM_MAT(),
            AdaptationMethod::VonKries => VON_KRIES_TRANSFORM_MAT(),
            AdaptationMethod::XyzScaling => XYZ_SCALING_TRANSFORM_MAT(),
        }
    }

    /// Builds the full adaptation matrix M^-1 * S * M that maps tristimulus values relative to
    /// `source_white` onto values relative to `target_white`.
    pub fn adaptation_matrix(
        self,
        source_white: [f64; 3],
        target_white: [f64; 3],
    ) -> Result<Matrix<f64>> {
        let cone = self.matrix();
        let source_cone = mul3(&cone, source_white);
        let target_cone = mul3(&cone, target_white);
        let scale = Matrix::from_diag(&[
            target_cone[0] / source_cone[0],
            target_cone[1] / source_cone[1],
            target_cone[2] / source_cone[2],
        ]);
        Ok(&(&inv(&cone)? * &scale) * &cone)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_bradford_maps_white_to_white() {
        let d65 = [0.95047, 1.0, 1.08883];
        let d50 = [0.96422, 1.0, 0.82521];
        let m = AdaptationMethod::Bradford.adaptation_matrix(d65, d50).unwrap();
        let out = mul3(&m, d65);
        for i in 0..3 {
            assert!((out[i] - d50[i]).abs() <= 1e-12);
        }
        // the well-known D65 -> D50 Bradford matrix
        assert!((m[[0, 0]] - 1.0478112).abs() <= 1e-4);
        assert!((m[[2, 2]] - 0.7521316).abs() <= 1e-4);
    }

    #[test]
    fn test_same_white_is_identity() {
        let d50 = [0.96422, 1.0, 0.82521];
        for method in [
            AdaptationMethod::Bradford,
            AdaptationMethod::VonKries,
            AdaptationMethod::XyzScaling,
        ]
        .iter()
        {
            let m = method.adaptation_matrix(d50, d50).unwrap();
            let out = mul3(&m, [0.3, 0.4, 0.5]);
            assert!((out[0] - 0.3).abs() <= 1e-12);
            assert!((out[1] - 0.4).abs() <= 1e-12);
            assert!((out[2] - 0.5).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_singular_matrix_is_an_error() {
        let singular = Matrix::new(3, 3, vec![1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0]);
        assert_eq!(det3(&singular), 0.0);
        assert!(inv(&singular).is_err());
        assert!((det3(&BRADFORD_TRANSFORM_MAT()) - 1.790016).abs() <= 1e-6);
    }

    #[test]
    fn test_inverse_borrows_its_input() {
        let m = BRADFORD_TRANSFORM_MAT();
        let m_inv = inv(&m).unwrap();
        let v = [0.2, 0.7, -0.4];
        let back = mul3(&m, mul3(&m_inv, v));
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() <= 1e-12);
        }
        // the original is still usable, and unchanged
        assert_eq!(m.data(), BRADFORD_TRANSFORM_MAT().data());
    }

    #[test]
    fn test_lightness_constants() {
        assert!((CIE_E - 0.008856).abs() <= 1e-6);
        assert!((CIE_K - 903.3).abs() <= 0.1);
        assert!((CIE_E * CIE_K - 8.0).abs() <= 1e-12);
    }
}
