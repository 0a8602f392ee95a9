//! geonav-rs: the navigation core of an interactive 3D globe viewer.
//!
//! A navigator turns a handful of viewing parameters (a look-at location, a
//! range, heading, tilt and roll) into the camera pose a renderer draws with.
//!
//! # Quick Start
//!
//! ```no_run
//! use geonav::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut viewer = Viewer::new(Options::default())?;
//!
//!     // Gesture and animation drivers mutate the navigator...
//!     let navigator = viewer.navigator_mut();
//!     navigator.set_look_at_location(Location::new(48.85, 2.35))?;
//!     navigator.set_range(2.0e6)?;
//!     navigator.set_tilt(45.0)?;
//!
//!     // ...and the render loop reads one pose per frame.
//!     let camera = viewer.frame();
//!     println!("eye at {:?}", camera.eye_position);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Limits
//!
//! With 2D limits enabled (the default), tilt is held to `[0, 90]` and range to
//! the flat-map bounds in [`RangeLimits`]. Without them, tilt may reach 180 and
//! range extends to the escape distance.

mod init;
mod viewer;

pub use init::init_logging;
pub use viewer::{Context, Viewer};

// Re-export core types
pub use geonav_core::{
    angle,
    error::{GeonavError, Result},
    globe::{Ellipsoid, Globe, GlobeProjection, LocalFrame},
    location::{Location, Position},
    options::{GlobeOptions, NavigatorOptions, Options, RangeLimits},
    DMat4, DQuat, DVec3,
};

// Re-export navigation types
pub use geonav_navigate::{
    CameraStrategy, CameraTransform, CameraUniforms, FreeEyeNavigator, LimitPolicy,
    LookAtNavigator, NavigatorState,
};
