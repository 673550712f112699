//! Math operations that work in both std and no-std environments.
//!
//! This module provides the floating-point abstraction the conversion kernels are written
//! against. It can use either the standard library (when the `std` feature is enabled) or `libm`
//! (in no-std environments), and is implemented for both `f32` and `f64`.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!(
    "geoconv requires floating-point math support. \
     Enable either the `std` feature (default) or the `libm` feature for no-std environments."
);

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point scalar the conversions can be computed in.
///
/// Implemented for `f32` and `f64`. The trait is sealed; the conversions are only tested (and
/// tuned) for IEEE-754 single and double precision.
pub trait Real:
    sealed::Sealed
    + Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
    fn is_finite(self) -> bool;
}

macro_rules! impl_real {
    ($t:ty, $sin:ident, $cos:ident, $atan2:ident, $sqrt:ident) => {
        impl Real for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn sin(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::sin(self)
                }
                #[cfg(all(not(feature = "std"), feature = "libm"))]
                {
                    libm::$sin(self)
                }
            }

            #[inline]
            fn cos(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::cos(self)
                }
                #[cfg(all(not(feature = "std"), feature = "libm"))]
                {
                    libm::$cos(self)
                }
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::atan2(self, other)
                }
                #[cfg(all(not(feature = "std"), feature = "libm"))]
                {
                    libm::$atan2(self, other)
                }
            }

            #[inline]
            fn sqrt(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::sqrt(self)
                }
                #[cfg(all(not(feature = "std"), feature = "libm"))]
                {
                    libm::$sqrt(self)
                }
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    };
}

impl_real!(f32, sinf, cosf, atan2f, sqrtf);
impl_real!(f64, sin, cos, atan2, sqrt);

#[cfg(test)]
mod tests {
    use super::Real;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn sin() {
        assert_eq!(Real::sin(1.2345_f64), 0.943_983_323_944_511_1);
    }

    #[rstest]
    #[case(1., 1., core::f64::consts::FRAC_PI_4)]
    #[case(1., 0., core::f64::consts::FRAC_PI_2)]
    #[case(0., -1., core::f64::consts::PI)]
    #[case(-1., 0., -core::f64::consts::FRAC_PI_2)]
    fn atan2_quadrants(#[case] y: f64, #[case] x: f64, #[case] expected: f64) {
        assert_relative_eq!(Real::atan2(y, x), expected);
        assert_relative_eq!(Real::atan2(y as f32, x as f32), expected as f32);
    }

    #[test]
    fn single_and_double_agree() {
        for x in [0.0_f64, 0.25, 1.0, 2.5, -3.0] {
            assert_relative_eq!(Real::cos(x as f32), Real::cos(x) as f32, epsilon = 1e-6);
            assert_relative_eq!(
                Real::sqrt(x.abs() as f32),
                Real::sqrt(x.abs()) as f32,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn finiteness() {
        assert!(Real::is_finite(1.0_f32));
        assert!(!Real::is_finite(f64::NAN));
        assert!(!Real::is_finite(f64::INFINITY));
    }
}
