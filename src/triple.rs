use crate::Real;

#[cfg(doc)]
use crate::batch;

/// A container holding one ordered coordinate triple.
///
/// The conversions in this crate do not care how a coordinate is stored, only that its three
/// components can be read and written in order. For geodetic coordinates the order is
/// (longitude, latitude, altitude); for ECEF coordinates it is (x, y, z).
///
/// Implementations are provided for `[T; 3]`, `(T, T, T)`, and nalgebra's `Point3` and
/// `Vector3`. nalgebra's matrix types have an inherent `get` of their own, so call
/// `Triple::get(&vector)` and `Triple::set(&mut vector, ..)` on them directly.
///
/// Implement it for your own types to convert them in place:
///
/// ```rust
/// use geoconv::{convert, Sphere, Triple};
///
/// struct Sample {
///     lon: f64,
///     lat: f64,
///     alt: f64,
///     quality: u8,
/// }
///
/// impl Triple<f64> for Sample {
///     fn get(&self) -> [f64; 3] {
///         [self.lon, self.lat, self.alt]
///     }
///
///     fn set(&mut self, [lon, lat, alt]: [f64; 3]) {
///         self.lon = lon;
///         self.lat = lat;
///         self.alt = alt;
///     }
/// }
///
/// let mut sample = Sample { lon: 0., lat: 0., alt: 0., quality: 3 };
/// convert::geodetic_to_ecef_in_place(&mut sample, Sphere::new(6_378_137.));
/// assert_eq!(sample.lon, 6_378_137.);
/// assert_eq!(sample.quality, 3);
/// ```
pub trait Triple<T> {
    /// Reads all three components.
    fn get(&self) -> [T; 3];

    /// Overwrites all three components.
    fn set(&mut self, components: [T; 3]);
}

impl<T: Real> Triple<T> for [T; 3] {
    #[inline]
    fn get(&self) -> [T; 3] {
        *self
    }

    #[inline]
    fn set(&mut self, components: [T; 3]) {
        *self = components;
    }
}

impl<T: Real> Triple<T> for (T, T, T) {
    #[inline]
    fn get(&self) -> [T; 3] {
        [self.0, self.1, self.2]
    }

    #[inline]
    fn set(&mut self, [a, b, c]: [T; 3]) {
        *self = (a, b, c);
    }
}

impl<T: Real + nalgebra::Scalar> Triple<T> for nalgebra::Point3<T> {
    #[inline]
    fn get(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    fn set(&mut self, [x, y, z]: [T; 3]) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

impl<T: Real + nalgebra::Scalar> Triple<T> for nalgebra::Vector3<T> {
    #[inline]
    fn get(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    fn set(&mut self, [x, y, z]: [T; 3]) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

/// Read access to coordinates stored as structure-of-arrays, ie as three parallel columns.
///
/// Column `x` holds longitudes (geodetic) or X (ECEF), `y` latitudes or Y, and `z` altitudes or
/// Z. Used as the source of the SoA drivers in [`batch`].
pub trait Columns<T> {
    /// Returns the `x`, `y`, and `z` columns.
    fn columns(&self) -> [&[T]; 3];
}

/// Write access to coordinates stored as structure-of-arrays.
///
/// Used as the destination of the SoA drivers in [`batch`].
pub trait ColumnsMut<T> {
    /// Returns the `x`, `y`, and `z` columns.
    fn columns_mut(&mut self) -> [&mut [T]; 3];
}

/// Borrowed, read-only structure-of-arrays view over three caller-owned columns.
#[derive(Debug, Clone, Copy)]
pub struct SoaRef<'a, T> {
    pub x: &'a [T],
    pub y: &'a [T],
    pub z: &'a [T],
}

/// Borrowed, writable structure-of-arrays view over three caller-owned columns.
#[derive(Debug)]
pub struct SoaMut<'a, T> {
    pub x: &'a mut [T],
    pub y: &'a mut [T],
    pub z: &'a mut [T],
}

impl<T> Columns<T> for SoaRef<'_, T> {
    fn columns(&self) -> [&[T]; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T> Columns<T> for SoaMut<'_, T> {
    fn columns(&self) -> [&[T]; 3] {
        [&*self.x, &*self.y, &*self.z]
    }
}

impl<T> ColumnsMut<T> for SoaMut<'_, T> {
    fn columns_mut(&mut self) -> [&mut [T]; 3] {
        [&mut *self.x, &mut *self.y, &mut *self.z]
    }
}

impl<T, C: AsRef<[T]>> Columns<T> for [C; 3] {
    fn columns(&self) -> [&[T]; 3] {
        let [x, y, z] = self;
        [x.as_ref(), y.as_ref(), z.as_ref()]
    }
}

impl<T, C: AsMut<[T]>> ColumnsMut<T> for [C; 3] {
    fn columns_mut(&mut self) -> [&mut [T]; 3] {
        let [x, y, z] = self;
        [x.as_mut(), y.as_mut(), z.as_mut()]
    }
}

impl<T, C: AsRef<[T]>> Columns<T> for (C, C, C) {
    fn columns(&self) -> [&[T]; 3] {
        [self.0.as_ref(), self.1.as_ref(), self.2.as_ref()]
    }
}

impl<T, C: AsMut<[T]>> ColumnsMut<T> for (C, C, C) {
    fn columns_mut(&mut self) -> [&mut [T]; 3] {
        let (x, y, z) = self;
        [x.as_mut(), y.as_mut(), z.as_mut()]
    }
}
