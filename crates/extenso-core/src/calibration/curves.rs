//! Calibration curves
//!
//! Degree-5 polynomials from the manufacturer's calibration certificates,
//! converting a normalized output ratio into displacement in millimetres.
//! The same three certificates apply to every channel; only the baseline
//! differs per channel.

use serde::{Deserialize, Serialize};

/// Number of polynomial coefficients (degree 5)
pub const COEFFICIENT_COUNT: usize = 6;

/// Number of certificate curves applied to each channel
pub const CURVE_COUNT: usize = 3;

/// A fixed-coefficient calibration polynomial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCurve {
    /// Coefficients, highest degree first
    pub coefficients: [f64; COEFFICIENT_COUNT],
}

impl CalibrationCurve {
    /// Calibration certificate No. 1
    pub const CERTIFICATE_1: Self = Self::new([
        632.1661, -456.938, 141.769, -12.6897, 5.03271, -0.0440119,
    ]);

    /// Calibration certificate No. 2
    pub const CERTIFICATE_2: Self = Self::new([
        1764.0067, -1719.5542, 651.97883, -105.53222, 12.248305, -0.30149893,
    ]);

    /// Calibration certificate No. 3
    pub const CERTIFICATE_3: Self = Self::new([
        2224.8258, -2238.1605, 870.29635, -147.20228, 15.573023, -0.47244019,
    ]);

    /// The three certificate curves in application order
    pub const CERTIFICATES: [Self; CURVE_COUNT] = [
        Self::CERTIFICATE_1,
        Self::CERTIFICATE_2,
        Self::CERTIFICATE_3,
    ];

    /// Create a curve from coefficients, highest degree first
    pub const fn new(coefficients: [f64; COEFFICIENT_COUNT]) -> Self {
        Self { coefficients }
    }

    /// Evaluate the polynomial at `x` (Horner form)
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}
