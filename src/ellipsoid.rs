use crate::{Ellipsoid, ReferenceBody, Real};

impl<T: Real> ReferenceBody<T> for Ellipsoid<T> {
    /// See
    /// <https://en.wikipedia.org/wiki/Geographic_coordinate_conversion#From_geodetic_to_ECEF_coordinates>.
    #[inline]
    fn geodetic_to_ecef(&self, [lon, lat, alt]: [T; 3]) -> [T; 3] {
        let a = self.major_axis();
        let a2 = a * a;
        let b = self.minor_axis();
        let b2 = b * b;

        let sin_lon = lon.sin();
        let cos_lon = lon.cos();
        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        // https://en.wikipedia.org/wiki/Earth_radius#Prime_vertical
        let n_phi = a2 / (a2 * cos_lat * cos_lat + b2 * sin_lat * sin_lat).sqrt();
        let n_phi_alt_cos_lat = (n_phi + alt) * cos_lat;
        [
            n_phi_alt_cos_lat * cos_lon,
            n_phi_alt_cos_lat * sin_lon,
            ((b2 / a2) * n_phi + alt) * sin_lat,
        ]
    }

    /// Uses [Bowring's method][bowring] in a single, closed-form pass.
    ///
    /// This is an approximation: it is not iterated to convergence, and its accuracy degrades
    /// slightly for bodies with extreme flattening. For the Earth it is accurate to well below a
    /// millimeter near the surface.
    ///
    /// [bowring]: https://en.wikipedia.org/wiki/Geographic_coordinate_conversion#Simple_iterative_conversion_for_latitude_and_height
    #[inline]
    fn ecef_to_geodetic(&self, [x, y, z]: [T; 3]) -> [T; 3] {
        let a = self.major_axis();
        let b = self.minor_axis();
        let e2 = self.eccentricity_sq();
        let ep2 = self.second_eccentricity_sq();

        let p = (x * x + y * y).sqrt();
        // at the poles this is atan2(0, 0), which is whatever the platform makes of it
        let lon = y.atan2(x);
        // parametric (reduced) latitude
        let theta = (z * a).atan2(p * b);
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();
        let sin3_theta = sin_theta * sin_theta * sin_theta;
        let cos3_theta = cos_theta * cos_theta * cos_theta;
        let lat = (z + ep2 * b * sin3_theta).atan2(p - e2 * a * cos3_theta);
        let sin_lat = lat.sin();
        let n = a / (T::ONE - e2 * sin_lat * sin_lat).sqrt();
        let alt = p / lat.cos() - n;
        [lon, lat, alt]
    }
}
