use crate::Real;
use core::fmt;
use core::fmt::Display;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::{batch, convert};

/// A reference body that geodetic coordinates can be expressed relative to.
///
/// The two methods are the scalar conversion kernels; every function in [`convert`] and
/// [`batch`] is a thin wrapper that calls them once per coordinate. Both are pure functions of
/// their inputs: they never fail, and invalid input (eg, a negative radius) propagates to
/// non-physical values, `NaN`, or infinity rather than being rejected.
///
/// Geodetic triples are ordered (longitude, latitude, altitude) with angles in radians; ECEF
/// triples are ordered (x, y, z). All lengths are in whatever unit the body's parameters are
/// expressed in.
pub trait ReferenceBody<T: Real>: Copy {
    /// Converts a geodetic (longitude, latitude, altitude) triple to ECEF (x, y, z).
    #[must_use]
    fn geodetic_to_ecef(&self, geodetic: [T; 3]) -> [T; 3];

    /// Converts an ECEF (x, y, z) triple to geodetic (longitude, latitude, altitude).
    #[must_use]
    fn ecef_to_geodetic(&self, ecef: [T; 3]) -> [T; 3];
}

/// A body approximated as a perfect sphere.
///
/// No validation is performed on construction; use [`Sphere::checked`] if the radius comes from
/// an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere<T> {
    radius: T,
}

impl<T: Real> Sphere<T> {
    /// Constructs a sphere with the given radius.
    #[must_use]
    pub const fn new(radius: T) -> Self {
        Self { radius }
    }

    /// Constructs a sphere with the given radius.
    ///
    /// Returns `None` unless the radius is finite and strictly positive.
    #[must_use]
    pub fn checked(radius: T) -> Option<Self> {
        (radius.is_finite() && radius > T::ZERO).then_some(Self { radius })
    }

    /// Returns the radius of the sphere.
    #[must_use]
    pub fn radius(&self) -> T {
        self.radius
    }
}

/// A body approximated as an oblate ellipsoid of revolution.
///
/// The major axis is expected to be no smaller than the minor axis, but [`Ellipsoid::new`] does
/// not enforce this; use [`Ellipsoid::checked`] for that.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid<T> {
    #[doc(alias = "a")]
    major_axis: T,
    #[doc(alias = "b")]
    minor_axis: T,
}

impl<T: Real> Ellipsoid<T> {
    /// Constructs an ellipsoid from its semi-major (equatorial) and semi-minor (polar) axes.
    #[must_use]
    pub const fn new(major_axis: T, minor_axis: T) -> Self {
        Self {
            major_axis,
            minor_axis,
        }
    }

    /// Constructs an ellipsoid from its semi-major and semi-minor axes.
    ///
    /// Returns `None` unless both axes are finite and strictly positive, and the major axis is
    /// no smaller than the minor axis.
    #[must_use]
    pub fn checked(major_axis: T, minor_axis: T) -> Option<Self> {
        let valid = major_axis.is_finite()
            && minor_axis.is_finite()
            && minor_axis > T::ZERO
            && major_axis >= minor_axis;
        valid.then_some(Self::new(major_axis, minor_axis))
    }

    /// Returns the semi-major (equatorial) axis.
    #[doc(alias = "a")]
    #[must_use]
    pub fn major_axis(&self) -> T {
        self.major_axis
    }

    /// Returns the semi-minor (polar) axis.
    #[doc(alias = "b")]
    #[must_use]
    pub fn minor_axis(&self) -> T {
        self.minor_axis
    }

    /// Returns the flattening `(a - b) / a`.
    #[doc(alias = "f")]
    #[must_use]
    pub fn flattening(&self) -> T {
        (self.major_axis - self.minor_axis) / self.major_axis
    }

    /// Returns the first eccentricity squared, `(a² - b²) / a²`.
    #[doc(alias = "e^2")]
    #[must_use]
    pub fn eccentricity_sq(&self) -> T {
        let a2 = self.major_axis * self.major_axis;
        let b2 = self.minor_axis * self.minor_axis;
        (a2 - b2) / a2
    }

    /// Returns the second eccentricity squared, `(a² - b²) / b²`.
    #[doc(alias = "second_eccentricity")]
    #[must_use]
    pub fn second_eccentricity_sq(&self) -> T {
        let a2 = self.major_axis * self.major_axis;
        let b2 = self.minor_axis * self.minor_axis;
        (a2 - b2) / b2
    }

    /// Returns the [prime-vertical radius of curvature][pv] N(φ) at the given latitude (in
    /// radians), ie the east-west radius of curvature.
    ///
    /// [pv]: https://en.wikipedia.org/wiki/Earth_radius#Prime_vertical
    #[doc(alias = "N")]
    #[must_use]
    pub fn prime_vertical_radius(&self, latitude: T) -> T {
        let a2 = self.major_axis * self.major_axis;
        let b2 = self.minor_axis * self.minor_axis;
        let sin_lat = latitude.sin();
        let cos_lat = latitude.cos();
        a2 / (a2 * cos_lat * cos_lat + b2 * sin_lat * sin_lat).sqrt()
    }
}

// Parameters of the WGS84 ellipsoid
// https://nsgreg.nga.mil/doc/view?i=4085 table 3.1
macro_rules! well_known_bodies {
    ($t:ty) => {
        impl Sphere<$t> {
            /// A sphere with the WGS84 equatorial radius, 6 378 137 m.
            pub const WGS84_EQUATORIAL: Self = Self::new(6_378_137.0);

            /// A sphere with the IUGG mean Earth radius, 6 371 008.8 m.
            pub const MEAN_EARTH: Self = Self::new(6_371_008.8);
        }

        impl Ellipsoid<$t> {
            /// The [WGS84](https://en.wikipedia.org/wiki/World_Geodetic_System#WGS_84) reference
            /// ellipsoid, in meters.
            // b = a * (1 - f), with 1/f = 298.257223563
            pub const WGS84: Self = Self::new(
                6_378_137.0,
                6_378_137.0 * (1.0 - 1.0 / 298.257_223_563),
            );
        }
    };
}

well_known_bodies!(f32);
well_known_bodies!(f64);

impl<T: Display> Display for Sphere<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sphere(r = {})", self.radius)
    }
}

impl<T: Display> Display for Ellipsoid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ellipsoid(a = {}, b = {})", self.major_axis, self.minor_axis)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T> AbsDiffEq<Self> for Sphere<T>
where
    T: Real + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T> RelativeEq for Sphere<T>
where
    T: Real + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.radius
            .relative_eq(&other.radius, epsilon, max_relative)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T> AbsDiffEq<Self> for Ellipsoid<T>
where
    T: Real + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.major_axis.abs_diff_eq(&other.major_axis, epsilon)
            && self.minor_axis.abs_diff_eq(&other.minor_axis, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T> RelativeEq for Ellipsoid<T>
where
    T: Real + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.major_axis
            .relative_eq(&other.major_axis, epsilon, max_relative)
            && self
                .minor_axis
                .relative_eq(&other.minor_axis, epsilon, max_relative)
    }
}
