//! Single-coordinate conversions over any [`Triple`] container.
//!
//! Every conversion comes in two flavours: an in-place one that overwrites a geodetic
//! coordinate with its ECEF equivalent (or vice versa), and one that reads from a source
//! container and writes into a distinct destination container. The latter may read and write
//! different container types.
//!
//! ```rust
//! use approx::assert_relative_eq;
//! use geoconv::{convert, Ellipsoid};
//!
//! let wgs84 = Ellipsoid::<f64>::WGS84;
//! let geodetic = (0.0_f64, 0.0_f64, 0.0_f64);
//! let mut ecef = [0.0_f64; 3];
//! convert::geodetic_to_ecef(&mut ecef, &geodetic, wgs84);
//! assert_relative_eq!(ecef[0], 6_378_137.);
//!
//! convert::ecef_to_geodetic_in_place(&mut ecef, wgs84);
//! assert_relative_eq!(ecef[2], 0., epsilon = 1e-6);
//! ```

use crate::{ReferenceBody, Real, Triple};

/// Converts the geodetic (longitude, latitude, altitude) coordinate in `coord` to ECEF (x, y, z)
/// in place.
#[inline]
pub fn geodetic_to_ecef_in_place<T, C, B>(coord: &mut C, body: B)
where
    T: Real,
    C: Triple<T> + ?Sized,
    B: ReferenceBody<T>,
{
    let ecef = body.geodetic_to_ecef(coord.get());
    coord.set(ecef);
}

/// Converts the geodetic (longitude, latitude, altitude) coordinate `from_geodetic` to ECEF
/// (x, y, z), writing the result to `to_ecef`.
#[inline]
pub fn geodetic_to_ecef<T, D, S, B>(to_ecef: &mut D, from_geodetic: &S, body: B)
where
    T: Real,
    D: Triple<T> + ?Sized,
    S: Triple<T> + ?Sized,
    B: ReferenceBody<T>,
{
    to_ecef.set(body.geodetic_to_ecef(from_geodetic.get()));
}

/// Converts the ECEF (x, y, z) coordinate in `coord` to geodetic (longitude, latitude,
/// altitude) in place.
#[inline]
pub fn ecef_to_geodetic_in_place<T, C, B>(coord: &mut C, body: B)
where
    T: Real,
    C: Triple<T> + ?Sized,
    B: ReferenceBody<T>,
{
    let geodetic = body.ecef_to_geodetic(coord.get());
    coord.set(geodetic);
}

/// Converts the ECEF (x, y, z) coordinate `from_ecef` to geodetic (longitude, latitude,
/// altitude), writing the result to `to_geodetic`.
#[inline]
pub fn ecef_to_geodetic<T, D, S, B>(to_geodetic: &mut D, from_ecef: &S, body: B)
where
    T: Real,
    D: Triple<T> + ?Sized,
    S: Triple<T> + ?Sized,
    B: ReferenceBody<T>,
{
    to_geodetic.set(body.ecef_to_geodetic(from_ecef.get()));
}
