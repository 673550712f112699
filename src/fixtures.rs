//! Shared test fixtures: the reference table, tolerances, and random geodetic inputs.

use crate::ReferenceBody;
use approx::assert_abs_diff_eq;
use core::f64::consts::{FRAC_PI_2, PI, TAU};
use quickcheck::Arbitrary;

/// Geodetic inputs (longitude°, latitude°, altitude m) of the reference table. The expected ECEF
/// outputs live next to the body they were computed for.
pub(crate) const REFERENCE_GEODETIC: [[f64; 3]; 6] = [
    [0.000_000, 0.000_000, 0.0],
    [-74.000_401, 40.719_645, 5.0],
    [-118.378_113, 34.122_223, 500.0],
    [-109.412_964, -27.160_732, 100.0],
    [139.703_152, 35.671_434, 50.0],
    [73.187_668, -0.688_815, 1500.0],
];

// the reference table was generated with this truncated value of π
#[allow(clippy::approx_constant)]
const TABLE_PI: f64 = 3.141_592_653;

pub(crate) fn to_radians([lon, lat, alt]: [f64; 3]) -> [f64; 3] {
    [lon * (TABLE_PI / 180.), lat * (TABLE_PI / 180.), alt]
}

pub(crate) fn to_radians_single([lon, lat, alt]: [f64; 3]) -> [f32; 3] {
    let rad = |deg: f64| (f64::from(deg as f32) * (TABLE_PI / 180.)) as f32;
    [rad(lon), rad(lat), alt as f32]
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Tolerance {
    /// meters, on each ECEF component
    pub(crate) ecef: f64,
    /// radians
    pub(crate) angle: f64,
    /// meters
    pub(crate) altitude: f64,
}

pub(crate) const DOUBLE: Tolerance = Tolerance {
    ecef: 1e-5,
    angle: 1e-9,
    altitude: 1e-3,
};

// NOTE: a single-precision ECEF coordinate on the surface of the earth has a resolution of 0.5m,
// and p / cos(φ) loses another few bits of it on the way back to altitude.
pub(crate) const SINGLE: Tolerance = Tolerance {
    ecef: 2.,
    angle: 1e-6,
    altitude: 10.,
};

pub(crate) fn assert_triple_eq(actual: [f64; 3], expected: [f64; 3], epsilon: f64) {
    for (a, e) in actual.into_iter().zip(expected) {
        assert_abs_diff_eq!(a, e, epsilon = epsilon);
    }
}

/// Compares geodetic triples, treating longitudes that differ by a full turn as equal.
pub(crate) fn assert_geodetic_eq(actual: [f64; 3], expected: [f64; 3], tolerance: Tolerance) {
    let [lon_a, lat_a, alt_a] = actual;
    let [lon_e, lat_e, alt_e] = expected;
    let lon_diff = (lon_a - lon_e + PI).rem_euclid(TAU) - PI;
    assert_abs_diff_eq!(lon_diff, 0., epsilon = tolerance.angle);
    assert_abs_diff_eq!(lat_a, lat_e, epsilon = tolerance.angle);
    assert_abs_diff_eq!(alt_a, alt_e, epsilon = tolerance.altitude);
}

pub(crate) fn try_roundtrip_double(body: impl ReferenceBody<f64>, Geodetic(geodetic): Geodetic) {
    let ecef = body.geodetic_to_ecef(geodetic);
    let back = body.ecef_to_geodetic(ecef);
    assert_geodetic_eq(back, geodetic, DOUBLE);
}

/// Narrows a geodetic triple to single precision, squeezing latitudes into [-80°, 80°] beyond
/// which single precision altitudes degrade.
pub(crate) fn to_single([lon, lat, alt]: [f64; 3]) -> [f32; 3] {
    [lon as f32, (lat * (80. / 90.)) as f32, alt as f32]
}

pub(crate) fn try_roundtrip_single(body: impl ReferenceBody<f32>, Geodetic(geodetic): Geodetic) {
    let geodetic = to_single(geodetic);
    let ecef = body.geodetic_to_ecef(geodetic);
    let back = body.ecef_to_geodetic(ecef);
    assert_geodetic_eq(back.map(f64::from), geodetic.map(f64::from), SINGLE);
}

/// A geodetic (longitude, latitude, altitude) triple in the physically meaningful ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Geodetic(pub(crate) [f64; 3]);

impl Arbitrary for Geodetic {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // quickcheck will give us awkward f64 values -- we ignore those
        let mut component = || loop {
            match f64::arbitrary(g) {
                0. => break 0.,
                f if f.is_normal() => break f,
                _ => {}
            }
        };
        let longitude = component();
        let latitude = component();
        let altitude = component();
        Self([
            longitude.rem_euclid(TAU) - PI,
            latitude.rem_euclid(PI) - FRAC_PI_2,
            altitude.rem_euclid(50000.) - 10000.,
        ])
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let [longitude, latitude, altitude] = self.0;
        if altitude != 0. {
            Box::new(
                altitude
                    .shrink()
                    .map(move |alt| Self([longitude, latitude, alt])),
            )
        } else if longitude != 0. {
            Box::new(
                longitude
                    .shrink()
                    .map(move |lon| Self([lon, latitude, altitude])),
            )
        } else {
            Box::new(
                latitude
                    .shrink()
                    .map(move |lat| Self([longitude, lat, altitude])),
            )
        }
    }
}

/// Returns `n` random geodetic triples.
pub(crate) fn random_geodetic(n: usize) -> Vec<[f64; 3]> {
    let mut g = quickcheck::Gen::new(1_000_000);
    (0..n)
        .map(|_| Geodetic::arbitrary(&mut g).0)
        .collect()
}
