//! This library converts coordinates between geodetic (longitude, latitude, altitude) and
//! Earth-Centered, Earth-Fixed (ECEF, cartesian x, y, z) form, relative to either a
//! [`Sphere`] or an [`Ellipsoid`] of revolution.
//!
//! The conversions are closed-form, never fail, and work in both `f32` and `f64` (see
//! [`Real`]). They are exposed at three levels:
//!
//! - the scalar kernels on [`ReferenceBody`], which map one `[T; 3]` to another;
//! - the single-coordinate functions in [`convert`], which work on any container implementing
//!   [`Triple`] (arrays, tuples, nalgebra points and vectors, or your own types), either in
//!   place or from one container into another;
//! - the batch functions in [`batch`], which convert many coordinates stored either as an array
//!   of structures (a slice of [`Triple`]s) or as a structure of arrays (see [`Columns`]).
//!
//! Angles are always in radians. Lengths are in whatever unit the body was constructed with;
//! the well-known bodies ([`Ellipsoid::WGS84`], [`Sphere::MEAN_EARTH`], ...) use meters. If you
//! would rather work with [`uom`](https://docs.rs/uom) quantities, enable the `units` feature.
//!
//! # Examples
//!
//! Converting a single position to ECEF and back:
//!
//! ```
//! use approx::assert_relative_eq;
//! use geoconv::{convert, Ellipsoid, ReferenceBody};
//!
//! let wgs84 = Ellipsoid::<f64>::WGS84;
//!
//! // longitude first!
//! let geodetic = [12_f64.to_radians(), 30_f64.to_radians(), 1000.];
//! let ecef = wgs84.geodetic_to_ecef(geodetic);
//!
//! let mut back = (0., 0., 0.);
//! convert::ecef_to_geodetic(&mut back, &ecef, wgs84);
//! assert_relative_eq!(back.0, geodetic[0], epsilon = 1e-9);
//! assert_relative_eq!(back.1, geodetic[1], epsilon = 1e-9);
//! assert_relative_eq!(back.2, geodetic[2], epsilon = 1e-3);
//! ```
//!
//! Converting a track stored column-wise, in single precision:
//!
//! ```
//! use geoconv::{batch, Sphere};
//!
//! let lon = vec![0.0_f32, 0.1, 0.2];
//! let lat = vec![0.0_f32, 0.0, 0.0];
//! let alt = vec![0.0_f32, 0.0, 0.0];
//! let mut ecef = [vec![0.0_f32; 3], vec![0.0_f32; 3], vec![0.0_f32; 3]];
//!
//! batch::geodetic_to_ecef_soa(&mut ecef, &[lon, lat, alt], 3, Sphere::<f32>::MEAN_EARTH);
//! assert_eq!(ecef[0][0], 6_371_008.8);
//! ```
//!
//! # Features
//!
//! - `std` (default) or `libm`: where the trigonometry comes from. Exactly one must be enabled;
//!   use `--no-default-features --features libm` on targets without `std`.
//! - `serde` (default): `Serialize`/`Deserialize` for the body types.
//! - `approx` (default): `approx` comparisons for the body types.
//! - `units` (default, implies `std`): [`uom`](https://docs.rs/uom)-typed constructors in
//!   `units`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod bodies;
mod ellipsoid;
mod float_math;
mod sphere;
mod triple;

pub mod batch;
pub mod convert;
#[cfg(feature = "units")]
pub mod units;

#[cfg(test)]
mod fixtures;

pub use bodies::{Ellipsoid, ReferenceBody, Sphere};
pub use float_math::Real;
pub use triple::{Columns, ColumnsMut, SoaMut, SoaRef, Triple};
