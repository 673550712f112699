//! [`uom`]-typed entry points, for callers who keep their quantities in units rather than in
//! bare radians and meters.
//!
//! The conversions themselves work on plain `f64` triples; these helpers only move quantities in
//! and out of that representation.
//!
//! ```rust
//! use geoconv::{convert, units, Ellipsoid};
//! use uom::si::f64::{Angle, Length};
//! use uom::si::{angle::degree, length::meter};
//!
//! let wgs84 = Ellipsoid::with_axes(
//!     Length::new::<meter>(6_378_137.),
//!     Length::new::<meter>(6_356_752.314_245),
//! );
//! let mut coord = units::geodetic(
//!     Angle::new::<degree>(12.),
//!     Angle::new::<degree>(30.),
//!     Length::new::<meter>(1000.),
//! );
//! convert::geodetic_to_ecef_in_place(&mut coord, wgs84);
//! let (x, _, _) = units::split_ecef(coord);
//! assert!(x > Length::new::<meter>(5_000_000.));
//! ```

use crate::{Ellipsoid, Sphere};
use uom::si::f64::{Angle, Length};
use uom::si::{angle::radian, length::meter};

impl Sphere<f64> {
    /// Constructs a sphere with the given radius.
    ///
    /// Like [`Sphere::new`], this does not validate the radius.
    #[must_use]
    pub fn with_radius(radius: impl Into<Length>) -> Self {
        Self::new(radius.into().get::<meter>())
    }
}

impl Ellipsoid<f64> {
    /// Constructs an ellipsoid of revolution from its semi-major (equatorial) and semi-minor
    /// (polar) axes.
    ///
    /// Like [`Ellipsoid::new`], this does not validate the axes.
    #[must_use]
    pub fn with_axes(major_axis: impl Into<Length>, minor_axis: impl Into<Length>) -> Self {
        Self::new(
            major_axis.into().get::<meter>(),
            minor_axis.into().get::<meter>(),
        )
    }
}

/// Packs a geodetic coordinate into a (longitude, latitude, altitude) triple in radians and
/// meters.
///
/// Note that the argument order puts longitude first, unlike most of the geodesy literature.
#[must_use]
pub fn geodetic(
    longitude: impl Into<Angle>,
    latitude: impl Into<Angle>,
    altitude: impl Into<Length>,
) -> [f64; 3] {
    [
        longitude.into().get::<radian>(),
        latitude.into().get::<radian>(),
        altitude.into().get::<meter>(),
    ]
}

/// Packs an ECEF coordinate into an (x, y, z) triple in meters.
#[must_use]
pub fn ecef(x: impl Into<Length>, y: impl Into<Length>, z: impl Into<Length>) -> [f64; 3] {
    [
        x.into().get::<meter>(),
        y.into().get::<meter>(),
        z.into().get::<meter>(),
    ]
}

/// Unpacks a (longitude, latitude, altitude) triple in radians and meters.
#[must_use]
pub fn split_geodetic([longitude, latitude, altitude]: [f64; 3]) -> (Angle, Angle, Length) {
    (
        Angle::new::<radian>(longitude),
        Angle::new::<radian>(latitude),
        Length::new::<meter>(altitude),
    )
}

/// Unpacks an (x, y, z) triple in meters.
#[must_use]
pub fn split_ecef([x, y, z]: [f64; 3]) -> (Length, Length, Length) {
    (
        Length::new::<meter>(x),
        Length::new::<meter>(y),
        Length::new::<meter>(z),
    )
}

#[cfg(test)]
mod tests {
    use super::{ecef, geodetic, split_ecef, split_geodetic};
    use crate::{convert, Ellipsoid, Sphere};
    use approx::assert_relative_eq;
    use uom::si::f64::{Angle, Length};
    use uom::si::{
        angle::{degree, radian},
        length::{foot, kilometer, meter},
    };

    #[test]
    fn bodies_from_lengths() {
        assert_relative_eq!(
            Sphere::with_radius(Length::new::<kilometer>(6_378.137)),
            Sphere::<f64>::WGS84_EQUATORIAL,
            epsilon = 1e-6
        );

        let wgs84 = Ellipsoid::with_axes(
            Length::new::<meter>(6_378_137.),
            Length::new::<kilometer>(6_356.752_314_245_179),
        );
        assert_relative_eq!(wgs84, Ellipsoid::<f64>::WGS84, epsilon = 1e-6);
    }

    #[test]
    fn geodetic_is_radians_and_meters() {
        let [lon, lat, alt] = geodetic(
            Angle::new::<degree>(180.),
            Angle::new::<degree>(-90.),
            Length::new::<foot>(1000.),
        );
        assert_relative_eq!(lon, core::f64::consts::PI);
        assert_relative_eq!(lat, -core::f64::consts::FRAC_PI_2);
        assert_relative_eq!(alt, 304.8, epsilon = 1e-9);
    }

    #[test]
    fn ecef_is_meters() {
        let xyz = ecef(
            Length::new::<kilometer>(1.),
            Length::new::<meter>(-2.),
            Length::new::<foot>(0.),
        );
        assert_eq!(xyz, [1000., -2., 0.]);
    }

    #[test]
    fn split_undoes_pack() {
        let (lon, lat, alt) = split_geodetic([0.5, -0.25, 12.]);
        assert_eq!(lon.get::<radian>(), 0.5);
        assert_eq!(lat.get::<radian>(), -0.25);
        assert_eq!(alt.get::<meter>(), 12.);
        assert_eq!(geodetic(lon, lat, alt), [0.5, -0.25, 12.]);

        let (x, y, z) = split_ecef([1., 2., 3.]);
        assert_eq!(ecef(x, y, z), [1., 2., 3.]);
    }

    #[test]
    fn typed_roundtrip() {
        let wgs84 = Ellipsoid::<f64>::WGS84;
        let mut coord = geodetic(
            Angle::new::<degree>(-74.000_401),
            Angle::new::<degree>(40.719_645),
            Length::new::<meter>(5.),
        );
        convert::geodetic_to_ecef_in_place(&mut coord, wgs84);
        convert::ecef_to_geodetic_in_place(&mut coord, wgs84);

        let (lon, lat, alt) = split_geodetic(coord);
        assert_relative_eq!(lon.get::<degree>(), -74.000_401, epsilon = 1e-9);
        assert_relative_eq!(lat.get::<degree>(), 40.719_645, epsilon = 1e-9);
        assert_relative_eq!(alt.get::<meter>(), 5., epsilon = 1e-3);
    }
}
