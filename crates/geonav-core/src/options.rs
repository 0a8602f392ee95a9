//! Configuration options for geonav.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GeonavError, Result};
use crate::globe::{Ellipsoid, Globe, GlobeProjection};
use crate::location::Location;

/// Default field of view in degrees.
pub const DEFAULT_FIELD_OF_VIEW: f64 = 45.0;

/// Default eye-to-target distance in meters.
pub const DEFAULT_RANGE: f64 = 30e6;

/// Viewer configuration, passed explicitly at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Globe shape and projection.
    pub globe: GlobeOptions,

    /// Navigator defaults and limits.
    pub navigator: NavigatorOptions,
}

impl Options {
    /// Parses options from a JSON string and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file and validates them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the globe described by these options.
    #[must_use]
    pub fn build_globe(&self) -> Globe {
        Globe::new(self.globe.ellipsoid, self.globe.projection)
    }

    /// Range limits in effect: the configured ones, or ones derived from the globe.
    #[must_use]
    pub fn range_limits(&self) -> RangeLimits {
        self.navigator
            .limits
            .unwrap_or_else(|| RangeLimits::for_globe(&self.build_globe()))
    }

    /// Checks that every value is finite, positive where required and ordered.
    pub fn validate(&self) -> Result<()> {
        let ellipsoid = &self.globe.ellipsoid;
        if !(ellipsoid.semi_major_axis.is_finite() && ellipsoid.semi_major_axis > 0.0) {
            return Err(GeonavError::InvalidConfig(format!(
                "ellipsoid semi-major axis must be positive, got {}",
                ellipsoid.semi_major_axis
            )));
        }
        if !(ellipsoid.inverse_flattening == 0.0 || ellipsoid.inverse_flattening > 1.0) {
            return Err(GeonavError::InvalidConfig(format!(
                "inverse flattening must be 0 or greater than 1, got {}",
                ellipsoid.inverse_flattening
            )));
        }

        let nav = &self.navigator;
        if !nav.look_at_location.is_finite() {
            return Err(GeonavError::InvalidConfig(format!(
                "look-at location must be finite, got {:?}",
                nav.look_at_location
            )));
        }
        if !(nav.range.is_finite() && nav.range > 0.0) {
            return Err(GeonavError::InvalidConfig(format!(
                "default range must be positive, got {}",
                nav.range
            )));
        }
        if !(nav.field_of_view > 0.0 && nav.field_of_view < 180.0) {
            return Err(GeonavError::InvalidConfig(format!(
                "field of view must be within (0, 180), got {}",
                nav.field_of_view
            )));
        }

        self.range_limits().validate()
    }
}

/// Globe configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeOptions {
    /// Reference ellipsoid.
    pub ellipsoid: Ellipsoid,
    /// Active projection.
    pub projection: GlobeProjection,
}

/// Navigator defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorOptions {
    /// Initial look-at location.
    pub look_at_location: Location,
    /// Initial range in meters.
    pub range: f64,
    /// Initial field of view in degrees.
    pub field_of_view: f64,
    /// Whether flattened-globe limits apply.
    pub enable_2d_limits: bool,
    /// Explicit range limits. `None` derives them from the globe.
    pub limits: Option<RangeLimits>,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            look_at_location: Location::new(30.0, 30.0),
            range: DEFAULT_RANGE,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            enable_2d_limits: true,
            limits: None,
        }
    }
}

/// Bounds on the eye-to-target range, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLimits {
    /// Closest approach with 2D limits; keeps the eye out of the terrain.
    pub min_range_2d: f64,
    /// Farthest range with 2D limits; keeps the flat map from shrinking to a point.
    pub max_range_2d: f64,
    /// Closest approach in 3D.
    pub min_range_3d: f64,
    /// Farthest range in 3D, beyond which the globe is no longer a useful target.
    pub escape_distance: f64,
}

impl RangeLimits {
    /// Minimum 2D range in meters.
    pub const MIN_RANGE_2D: f64 = 10.0;
    /// Minimum 3D range in meters.
    pub const MIN_RANGE_3D: f64 = 1.0;
    /// Escape distance as a multiple of the equatorial radius.
    pub const ESCAPE_RADII: f64 = 20.0;

    /// Derives limits from the globe's size.
    ///
    /// The 2D maximum is one equatorial circumference, so the whole map still
    /// spans the viewport at the default field of view.
    #[must_use]
    pub fn for_globe(globe: &Globe) -> Self {
        Self {
            min_range_2d: Self::MIN_RANGE_2D,
            max_range_2d: globe.ellipsoid.equatorial_circumference(),
            min_range_3d: Self::MIN_RANGE_3D,
            escape_distance: Self::ESCAPE_RADII * globe.equatorial_radius(),
        }
    }

    /// Range bounds for the given mode, as `(min, max)`.
    #[must_use]
    pub fn bounds(&self, limits_2d: bool) -> (f64, f64) {
        if limits_2d {
            (self.min_range_2d, self.max_range_2d)
        } else {
            (self.min_range_3d, self.escape_distance)
        }
    }

    /// Rejects non-positive, non-finite or inverted bounds.
    ///
    /// The 2D interval must also lie inside the 3D one, so that turning 2D
    /// limits on never lets the camera closer or farther than 3D allows.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min_range_2d", self.min_range_2d),
            ("max_range_2d", self.max_range_2d),
            ("min_range_3d", self.min_range_3d),
            ("escape_distance", self.escape_distance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeonavError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if self.min_range_2d > self.max_range_2d {
            return Err(GeonavError::InvalidConfig(format!(
                "min_range_2d ({}) exceeds max_range_2d ({})",
                self.min_range_2d, self.max_range_2d
            )));
        }
        if self.min_range_3d > self.escape_distance {
            return Err(GeonavError::InvalidConfig(format!(
                "min_range_3d ({}) exceeds escape_distance ({})",
                self.min_range_3d, self.escape_distance
            )));
        }
        if self.min_range_2d < self.min_range_3d {
            return Err(GeonavError::InvalidConfig(format!(
                "min_range_2d ({}) is below min_range_3d ({})",
                self.min_range_2d, self.min_range_3d
            )));
        }
        if self.max_range_2d > self.escape_distance {
            return Err(GeonavError::InvalidConfig(format!(
                "max_range_2d ({}) exceeds escape_distance ({})",
                self.max_range_2d, self.escape_distance
            )));
        }
        Ok(())
    }
}

impl Default for RangeLimits {
    fn default() -> Self {
        Self::for_globe(&Globe::default())
    }
}
