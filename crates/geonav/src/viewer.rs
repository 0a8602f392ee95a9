//! The viewer: explicit context plus the navigator it drives.

use geonav_core::{Globe, GlobeProjection, Options, Result};
use geonav_navigate::{CameraStrategy, CameraTransform, LookAtNavigator};

/// Everything a viewer shares with its navigator and renderer.
///
/// Passed explicitly; there is no process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// The options the viewer was created with.
    pub options: Options,

    /// The globe being viewed.
    pub globe: Globe,
}

impl Context {
    /// Validates options and builds the context from them.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        let globe = options.build_globe();
        Ok(Self { options, globe })
    }
}

/// A globe viewer instance owning its context and look-at navigator.
///
/// Gesture and animation code mutates the navigator through
/// [`Viewer::navigator_mut`]; the render loop calls [`Viewer::frame`] once per
/// frame.
#[derive(Debug, Clone)]
pub struct Viewer {
    context: Context,
    navigator: LookAtNavigator,
}

impl Viewer {
    /// Creates a viewer from options.
    pub fn new(options: Options) -> Result<Self> {
        let context = Context::new(options)?;
        let navigator = LookAtNavigator::from_options(&context.options);
        log::info!(
            "viewer created: {} globe, look-at ({:.4}, {:.4}), range {} m",
            context.globe.projection.name(),
            navigator.look_at_location().latitude(),
            navigator.look_at_location().longitude(),
            navigator.range()
        );
        Ok(Self { context, navigator })
    }

    /// The viewer context.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The globe being viewed.
    #[must_use]
    pub fn globe(&self) -> &Globe {
        &self.context.globe
    }

    /// The look-at navigator.
    #[must_use]
    pub fn navigator(&self) -> &LookAtNavigator {
        &self.navigator
    }

    /// Mutable access to the look-at navigator, for gesture and animation drivers.
    pub fn navigator_mut(&mut self) -> &mut LookAtNavigator {
        &mut self.navigator
    }

    /// Switches the globe projection.
    ///
    /// The navigator's 2D-limits flag is independent of the projection and is
    /// left as is.
    pub fn set_projection(&mut self, projection: GlobeProjection) {
        if self.context.globe.projection != projection {
            log::info!(
                "globe projection changed from {} to {}",
                self.context.globe.projection.name(),
                projection.name()
            );
        }
        self.context.globe.projection = projection;
        self.context.options.globe.projection = projection;
    }

    /// Snapshot of the navigator as of the start of a frame.
    #[must_use]
    pub fn snapshot(&self) -> LookAtNavigator {
        self.navigator.clone()
    }

    /// Computes the camera pose for one rendered frame.
    #[must_use]
    pub fn frame(&self) -> CameraTransform {
        self.snapshot().compute_camera_transform(&self.context.globe)
    }
}
