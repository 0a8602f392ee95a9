//! Globe shape and projections from geographic to Cartesian coordinates.

use std::f64::consts::PI;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::location::{Location, Position};

/// A reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Equatorial radius in meters.
    pub semi_major_axis: f64,
    /// Inverse flattening (`a / (a - b)`). Zero means a perfect sphere.
    pub inverse_flattening: f64,
}

impl Ellipsoid {
    /// The WGS 84 ellipsoid.
    pub const WGS84: Self = Self {
        semi_major_axis: 6_378_137.0,
        inverse_flattening: 298.257_223_563,
    };

    /// Creates a sphere of the given radius.
    #[must_use]
    pub fn sphere(radius: f64) -> Self {
        Self {
            semi_major_axis: radius,
            inverse_flattening: 0.0,
        }
    }

    /// Flattening `f`.
    #[must_use]
    pub fn flattening(&self) -> f64 {
        if self.inverse_flattening == 0.0 {
            0.0
        } else {
            1.0 / self.inverse_flattening
        }
    }

    /// First eccentricity squared, `e^2 = f(2 - f)`.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Polar radius in meters.
    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening())
    }

    /// Length of the equator in meters.
    #[must_use]
    pub fn equatorial_circumference(&self) -> f64 {
        2.0 * PI * self.semi_major_axis
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// How geographic coordinates are mapped to Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlobeProjection {
    /// Curved globe: geodetic to Earth-centered Earth-fixed, Z along the polar axis.
    #[default]
    Ellipsoid3D,
    /// Flat map: `x = a * lon`, `y = a * lat` (radians), `z = altitude`.
    Equirectangular2D,
}

impl GlobeProjection {
    /// Returns true for flattened projections.
    #[must_use]
    pub fn is_2d(self) -> bool {
        matches!(self, GlobeProjection::Equirectangular2D)
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GlobeProjection::Ellipsoid3D => "3D ellipsoid",
            GlobeProjection::Equirectangular2D => "2D equirectangular",
        }
    }
}

/// Orthonormal east/north/up axes at a point on the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    pub east: DVec3,
    pub north: DVec3,
    pub up: DVec3,
}

/// The globe being viewed: an ellipsoid and the projection used to render it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Globe {
    pub ellipsoid: Ellipsoid,
    pub projection: GlobeProjection,
}

impl Globe {
    /// Creates a globe.
    #[must_use]
    pub fn new(ellipsoid: Ellipsoid, projection: GlobeProjection) -> Self {
        Self {
            ellipsoid,
            projection,
        }
    }

    /// Returns true if this globe is rendered as a flat map.
    #[must_use]
    pub fn is_2d(&self) -> bool {
        self.projection.is_2d()
    }

    /// Equatorial radius in meters.
    #[must_use]
    pub fn equatorial_radius(&self) -> f64 {
        self.ellipsoid.semi_major_axis
    }

    /// Cartesian point for a latitude, longitude (degrees) and altitude (meters).
    #[must_use]
    pub fn compute_point_from_position(&self, latitude: f64, longitude: f64, altitude: f64) -> DVec3 {
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        match self.projection {
            GlobeProjection::Ellipsoid3D => {
                let a = self.ellipsoid.semi_major_axis;
                let e2 = self.ellipsoid.eccentricity_squared();
                let (sin_lat, cos_lat) = lat.sin_cos();
                let (sin_lon, cos_lon) = lon.sin_cos();
                // Prime vertical radius of curvature
                let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
                DVec3::new(
                    (n + altitude) * cos_lat * cos_lon,
                    (n + altitude) * cos_lat * sin_lon,
                    (n * (1.0 - e2) + altitude) * sin_lat,
                )
            }
            GlobeProjection::Equirectangular2D => {
                let a = self.ellipsoid.semi_major_axis;
                DVec3::new(a * lon, a * lat, altitude)
            }
        }
    }

    /// Cartesian point for a [`Location`] at zero elevation.
    #[must_use]
    pub fn compute_point_from_location(&self, location: &Location) -> DVec3 {
        self.compute_point_from_position(location.latitude(), location.longitude(), 0.0)
    }

    /// Cartesian point for a [`Position`].
    #[must_use]
    pub fn compute_point(&self, position: &Position) -> DVec3 {
        self.compute_point_from_position(
            position.location.latitude(),
            position.location.longitude(),
            position.altitude,
        )
    }

    /// East/north/up axes at `location`.
    ///
    /// On the 3D ellipsoid `up` is the geodetic surface normal; at the poles
    /// `north` follows the direction of the given longitude's meridian. On a
    /// flat map the frame is the fixed X/Y/Z basis.
    #[must_use]
    pub fn surface_frame(&self, location: &Location) -> LocalFrame {
        match self.projection {
            GlobeProjection::Ellipsoid3D => {
                let (sin_lat, cos_lat) = location.latitude().to_radians().sin_cos();
                let (sin_lon, cos_lon) = location.longitude().to_radians().sin_cos();
                let up = DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
                let east = DVec3::new(-sin_lon, cos_lon, 0.0);
                let north = DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
                LocalFrame { east, north, up }
            }
            GlobeProjection::Equirectangular2D => LocalFrame {
                east: DVec3::X,
                north: DVec3::Y,
                up: DVec3::Z,
            },
        }
    }
}
