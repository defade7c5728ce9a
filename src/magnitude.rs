//! Tri-axial magnitude statistics for the fall-detection pipeline.
//!
//! Both calculators are pure and allocation-free; they run identically
//! on the host and on the nRF52840 (`libm` supplies the `no_std` math).

use libm::{cbrtf, fabsf, sqrtf};

/// One accelerometer reading: three orthogonal axes sampled at the same
/// instant. Passed by value and never retained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriaxialSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TriaxialSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Signal Vector Magnitude of this sample.
    pub fn vector_magnitude(&self) -> f32 {
        vector_magnitude(self.x, self.y, self.z)
    }

    /// Cube-root product magnitude of this sample.
    pub fn product_magnitude(&self) -> f32 {
        product_magnitude(self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for TriaxialSample {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f32, f32, f32)> for TriaxialSample {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Signal Vector Magnitude: `sqrt(x² + y² + z²)`.
///
/// Never negative; zero only for the zero vector.
pub fn vector_magnitude(x: f32, y: f32, z: f32) -> f32 {
    sqrtf(x * x + y * y + z * z)
}

/// Cube root of the absolute triaxial product: `cbrt(|x·y·z|)`.
///
/// The sign of the product is discarded *before* the cube root, so the
/// result is never negative. Zero iff any axis is zero.
pub fn product_magnitude(x: f32, y: f32, z: f32) -> f32 {
    cbrtf(fabsf(x * y * z))
}
