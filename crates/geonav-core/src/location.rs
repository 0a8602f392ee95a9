//! Geographic value types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::angle::{clamp_latitude, normalize_longitude};
use crate::error::{ensure_finite, GeonavError, Result};

/// A geographic coordinate pair in degrees.
///
/// Finite latitude is clamped to `[-90, 90]` and finite longitude wrapped to `[-180, 180]`
/// on construction. Fields are private: a location is replaced, never edited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "LocationDef")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct LocationDef {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<LocationDef> for Location {
    type Error = GeonavError;

    fn try_from(def: LocationDef) -> Result<Self> {
        Location::try_new(def.latitude, def.longitude)
    }
}

impl Location {
    /// Tolerance, in degrees, used by location equality.
    pub const EPSILON: f64 = 1e-9;

    /// The location at latitude 0, longitude 0.
    pub const ZERO: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Creates a normalized location.
    ///
    /// Non-finite components are kept as given so that consumers can reject
    /// them (see [`Location::is_finite`]); use [`Location::try_new`] to reject
    /// them up front.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: if latitude.is_finite() {
                clamp_latitude(latitude)
            } else {
                latitude
            },
            longitude: if longitude.is_finite() {
                normalize_longitude(longitude)
            } else {
                longitude
            },
        }
    }

    /// Creates a normalized location, rejecting non-finite components.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let location = Self::new(latitude, longitude);
        location.ensure_finite()?;
        Ok(location)
    }

    /// Returns true if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns `InvalidParameter` naming the first non-finite component.
    pub fn ensure_finite(&self) -> Result<()> {
        ensure_finite("latitude", self.latitude)?;
        ensure_finite("longitude", self.longitude)?;
        Ok(())
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns this location with both components re-normalized.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.latitude, self.longitude)
    }

    /// Returns true if both components agree within [`Location::EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.latitude - other.latitude).abs() <= Self::EPSILON
            && (self.longitude - other.longitude).abs() <= Self::EPSILON
    }

    /// Unit vector of this location on the unit sphere (Z toward the north pole).
    #[must_use]
    pub fn to_unit_vector(&self) -> DVec3 {
        let (sin_lat, cos_lat) = self.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.longitude.to_radians().sin_cos();
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Inverse of [`Location::to_unit_vector`]. The input need not be normalized.
    #[must_use]
    pub fn from_unit_vector(v: DVec3) -> Self {
        let horizontal = v.x.hypot(v.y);
        Self::new(
            v.z.atan2(horizontal).to_degrees(),
            v.y.atan2(v.x).to_degrees(),
        )
    }

    /// Angular great-circle distance to `other`, in radians.
    #[must_use]
    pub fn great_circle_distance(&self, other: &Self) -> f64 {
        let a = self.to_unit_vector();
        let b = other.to_unit_vector();
        a.cross(b).length().atan2(a.dot(b))
    }

    /// Interpolates along the great circle between `self` and `other`.
    ///
    /// `amount` is clamped to `[0, 1]`.
    #[must_use]
    pub fn interpolate_great_circle(&self, amount: f64, other: &Self) -> Self {
        let t = amount.clamp(0.0, 1.0);
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return *other;
        }

        let a = self.to_unit_vector();
        let b = other.to_unit_vector();
        let omega = self.great_circle_distance(other);
        let sin_omega = omega.sin();
        if sin_omega.abs() < 1e-12 {
            // Coincident or antipodal: no unique great circle.
            return self.interpolate_linear(t, other);
        }

        let v = a * (((1.0 - t) * omega).sin() / sin_omega) + b * ((t * omega).sin() / sin_omega);
        Self::from_unit_vector(v)
    }

    /// Interpolates latitude and longitude independently, taking the short
    /// way across the antimeridian.
    #[must_use]
    pub fn interpolate_linear(&self, amount: f64, other: &Self) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let mut delta_lon = other.longitude - self.longitude;
        if delta_lon > 180.0 {
            delta_lon -= 360.0;
        } else if delta_lon < -180.0 {
            delta_lon += 360.0;
        }
        Self::new(
            self.latitude + (other.latitude - self.latitude) * t,
            self.longitude + delta_lon * t,
        )
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A location plus an altitude in meters above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Geographic location.
    pub location: Location,
    /// Altitude in meters.
    pub altitude: f64,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            location: Location::new(latitude, longitude),
            altitude,
        }
    }

    /// Creates a position from a location and altitude, rejecting non-finite components.
    pub fn try_from_location(location: Location, altitude: f64) -> Result<Self> {
        location.ensure_finite()?;
        Ok(Self {
            location,
            altitude: ensure_finite("altitude", altitude)?,
        })
    }
}
