//! Batch conversions over many coordinates at once.
//!
//! Coordinates can be laid out as an array of structures (AoS), ie a slice of [`Triple`]s, or
//! as a structure of arrays (SoA), ie three parallel columns (see [`Columns`] and
//! [`ColumnsMut`]). Each driver converts the first `num_coords` coordinates of the source and
//! writes them to the same positions in the destination; anything past `num_coords` is left
//! untouched.
//!
//! The conversion of one coordinate never depends on another, so callers are free to split
//! their buffers (eg, with `chunks_mut`) and convert the pieces concurrently.
//!
//! # Panics
//!
//! Every driver panics if `num_coords` exceeds the length of a source or destination column or
//! slice. Debug builds report which one.
//!
//! ```rust
//! use geoconv::{batch, Sphere, SoaMut, SoaRef};
//!
//! let sphere = Sphere::new(6_378_137.0_f64);
//! let (lon, lat, alt) = ([0.0, 0.5], [0.0, -0.25], [0.0, 10.0]);
//! let (mut x, mut y, mut z) = ([0.0; 2], [0.0; 2], [0.0; 2]);
//!
//! batch::geodetic_to_ecef_soa(
//!     &mut SoaMut { x: &mut x, y: &mut y, z: &mut z },
//!     &SoaRef { x: &lon, y: &lat, z: &alt },
//!     2,
//!     sphere,
//! );
//! assert_eq!([x[0], y[0], z[0]], [6_378_137., 0., 0.]);
//! ```

use crate::{Columns, ColumnsMut, ReferenceBody, Real, Triple};

/// Converts `num_coords` geodetic coordinates stored as columns (longitude, latitude, altitude)
/// to ECEF columns (x, y, z).
pub fn geodetic_to_ecef_soa<T, D, S, B>(
    to_ecef: &mut D,
    from_geodetic: &S,
    num_coords: usize,
    body: B,
) where
    T: Real,
    D: ColumnsMut<T> + ?Sized,
    S: Columns<T> + ?Sized,
    B: ReferenceBody<T>,
{
    map_soa(
        to_ecef.columns_mut(),
        from_geodetic.columns(),
        num_coords,
        |geodetic| body.geodetic_to_ecef(geodetic),
    );
}

/// Converts `num_coords` ECEF coordinates stored as columns (x, y, z) to geodetic columns
/// (longitude, latitude, altitude).
pub fn ecef_to_geodetic_soa<T, D, S, B>(
    to_geodetic: &mut D,
    from_ecef: &S,
    num_coords: usize,
    body: B,
) where
    T: Real,
    D: ColumnsMut<T> + ?Sized,
    S: Columns<T> + ?Sized,
    B: ReferenceBody<T>,
{
    map_soa(
        to_geodetic.columns_mut(),
        from_ecef.columns(),
        num_coords,
        |ecef| body.ecef_to_geodetic(ecef),
    );
}

/// Converts the first `num_coords` geodetic coordinates in `from_geodetic` to ECEF, writing
/// them to the first `num_coords` elements of `to_ecef`.
pub fn geodetic_to_ecef_aos<T, D, S, B>(
    to_ecef: &mut [D],
    from_geodetic: &[S],
    num_coords: usize,
    body: B,
) where
    T: Real,
    D: Triple<T>,
    S: Triple<T>,
    B: ReferenceBody<T>,
{
    map_aos(to_ecef, from_geodetic, num_coords, |geodetic| {
        body.geodetic_to_ecef(geodetic)
    });
}

/// Converts the first `num_coords` ECEF coordinates in `from_ecef` to geodetic, writing them to
/// the first `num_coords` elements of `to_geodetic`.
pub fn ecef_to_geodetic_aos<T, D, S, B>(
    to_geodetic: &mut [D],
    from_ecef: &[S],
    num_coords: usize,
    body: B,
) where
    T: Real,
    D: Triple<T>,
    S: Triple<T>,
    B: ReferenceBody<T>,
{
    map_aos(to_geodetic, from_ecef, num_coords, |ecef| {
        body.ecef_to_geodetic(ecef)
    });
}

#[inline]
fn map_soa<T: Real>(
    [dst_x, dst_y, dst_z]: [&mut [T]; 3],
    [src_x, src_y, src_z]: [&[T]; 3],
    num_coords: usize,
    convert: impl Fn([T; 3]) -> [T; 3],
) {
    debug_assert!(
        [src_x.len(), src_y.len(), src_z.len()]
            .iter()
            .all(|&len| len >= num_coords),
        "source columns are shorter than num_coords ({num_coords})"
    );
    debug_assert!(
        [dst_x.len(), dst_y.len(), dst_z.len()]
            .iter()
            .all(|&len| len >= num_coords),
        "destination columns are shorter than num_coords ({num_coords})"
    );

    // slicing up front both checks the lengths and lets the loop go without bounds checks
    let src = src_x[..num_coords]
        .iter()
        .zip(&src_y[..num_coords])
        .zip(&src_z[..num_coords]);
    let dst = dst_x[..num_coords]
        .iter_mut()
        .zip(&mut dst_y[..num_coords])
        .zip(&mut dst_z[..num_coords]);

    for (((x, y), z), ((&a, &b), &c)) in dst.zip(src) {
        [*x, *y, *z] = convert([a, b, c]);
    }
}

#[inline]
fn map_aos<T, D, S>(
    dst: &mut [D],
    src: &[S],
    num_coords: usize,
    convert: impl Fn([T; 3]) -> [T; 3],
) where
    T: Real,
    D: Triple<T>,
    S: Triple<T>,
{
    debug_assert!(
        src.len() >= num_coords,
        "source holds {} coordinates, fewer than num_coords ({num_coords})",
        src.len()
    );
    debug_assert!(
        dst.len() >= num_coords,
        "destination holds {} coordinates, fewer than num_coords ({num_coords})",
        dst.len()
    );

    for (to, from) in dst[..num_coords].iter_mut().zip(&src[..num_coords]) {
        to.set(convert(from.get()));
    }
}
