//! Navigation strategies for geonav-rs.
//!
//! This crate turns navigator parameters into camera poses:
//! - [`NavigatorState`] holds heading, tilt, roll and field of view
//! - [`CameraStrategy`] is implemented by each navigation style
//! - [`LookAtNavigator`] orbits a look-at location under a [`LimitPolicy`]
//! - [`FreeEyeNavigator`] places the eye directly
//! - [`CameraTransform`] is the pose handed to the renderer

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod free_eye;
pub mod limits;
pub mod look_at;
pub mod navigator;

pub use camera::{CameraTransform, CameraUniforms};
pub use free_eye::FreeEyeNavigator;
pub use limits::{LimitPolicy, MAX_TILT_2D};
pub use look_at::LookAtNavigator;
pub use navigator::{CameraStrategy, NavigatorState, MAX_TILT};
