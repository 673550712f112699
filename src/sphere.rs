use crate::{ReferenceBody, Real, Sphere};

impl<T: Real> ReferenceBody<T> for Sphere<T> {
    /// See <https://en.wikipedia.org/wiki/Spherical_coordinate_system#Cartesian_coordinates>.
    #[inline]
    fn geodetic_to_ecef(&self, [lon, lat, alt]: [T; 3]) -> [T; 3] {
        let sin_lon = lon.sin();
        let cos_lon = lon.cos();
        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        let n = self.radius() + alt;
        let n_cos_lat = n * cos_lat;
        [n_cos_lat * cos_lon, n_cos_lat * sin_lon, n * sin_lat]
    }

    #[inline]
    fn ecef_to_geodetic(&self, [x, y, z]: [T; 3]) -> [T; 3] {
        let p = (x * x + y * y).sqrt();
        // at the poles this is atan2(0, 0), which is whatever the platform makes of it
        let lon = y.atan2(x);
        let lat = z.atan2(p);
        let alt = p / lat.cos() - self.radius();
        [lon, lat, alt]
    }
}
