//! Core types for geonav-rs.
//!
//! This crate provides the value types shared by every navigation strategy:
//! - [`Location`] and [`Position`] geographic coordinates
//! - [`Globe`] with its [`Ellipsoid`] and [`GlobeProjection`]
//! - Angle normalization helpers
//! - Configuration [`Options`] and the [`GeonavError`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod angle;
pub mod error;
pub mod globe;
pub mod location;
pub mod options;

pub use error::{GeonavError, Result};
pub use globe::{Ellipsoid, Globe, GlobeProjection, LocalFrame};
pub use location::{Location, Position};
pub use options::{GlobeOptions, NavigatorOptions, Options, RangeLimits};

// Re-export glam types for convenience
pub use glam::{DMat4, DQuat, DVec3};
