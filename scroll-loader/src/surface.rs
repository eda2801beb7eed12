use crate::{ControllerId, EdgeInsets, Point, Rect, ScrollGeometry};

/// How the host should apply a new content inset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsetTransition {
    Immediate,
    /// Animate towards the new inset. The curve is up to the host.
    Animated { duration_ms: u64 },
}

impl InsetTransition {
    pub(crate) fn from_duration(duration_ms: u64) -> Self {
        if duration_ms == 0 {
            Self::Immediate
        } else {
            Self::Animated { duration_ms }
        }
    }
}

/// The controller's own busy indicator, owned by the controller and mirrored to the surface
/// through [`ScrollSurface::update_loading_indicator`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadingIndicator {
    pub frame: Rect,
    pub is_animating: bool,
    /// The indicator was placed on the surface at attach time.
    pub is_installed: bool,
}

/// The host scroll surface a controller is bound to.
///
/// The controller never stores the surface. Every call that needs it takes `&mut S`, and the
/// host must keep passing the same surface the controller was attached to.
pub trait ScrollSurface {
    fn geometry(&self) -> ScrollGeometry;

    fn content_offset(&self) -> Point;

    fn set_content_offset(&mut self, offset: Point);

    fn set_content_inset(&mut self, inset: EdgeInsets, transition: InsetTransition);

    /// Starts forwarding offset changes to the controller `id`.
    fn add_offset_observer(&mut self, id: ControllerId);

    /// Stops forwarding offset changes to `id`. Called exactly once per registration.
    fn remove_offset_observer(&mut self, id: ControllerId);

    /// Mirrors the installed indicator after placement, frame, or animation changes.
    fn update_loading_indicator(&mut self, indicator: &LoadingIndicator) {
        let _ = indicator;
    }
}
