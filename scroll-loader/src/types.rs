/// Default extent of a loader strip, in surface points, along the loading axis.
pub const DEFAULT_LOADER_EXTENT: f64 = 64.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn with_origin_x(mut self, x: f64) -> Self {
        self.origin.x = x;
        self
    }

    pub fn with_origin_y(mut self, y: f64) -> Self {
        self.origin.y = y;
        self
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.origin.x.is_finite()
            && self.origin.y.is_finite()
            && self.size.width.is_finite()
            && self.size.height.is_finite()
    }
}

/// Padding reserved at each edge of a scroll surface's content area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Returns a copy with `delta` added to the top edge.
    pub fn with_top(mut self, delta: f64) -> Self {
        self.top += delta;
        self
    }

    pub fn with_left(mut self, delta: f64) -> Self {
        self.left += delta;
        self
    }

    pub fn with_bottom(mut self, delta: f64) -> Self {
        self.bottom += delta;
        self
    }

    pub fn with_right(mut self, delta: f64) -> Self {
        self.right += delta;
        self
    }
}

/// A snapshot of the host surface's geometry, as seen by a [`crate::LoaderDataSource`].
///
/// - `content_size` is the full scrollable content extent.
/// - `viewport_size` is the visible frame of the surface.
/// - `content_inset` is the inset currently applied, before any change the controller is about
///   to make.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    pub content_size: Size,
    pub viewport_size: Size,
    pub content_inset: EdgeInsets,
}

/// An "offset changed" notification from the host scroll surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetEvent {
    pub offset: Point,
    /// The surface is being moved by an active touch.
    pub is_dragging: bool,
    /// The touch was released and the surface is still coasting.
    pub is_decelerating: bool,
}

impl OffsetEvent {
    pub const fn dragging(offset: Point) -> Self {
        Self {
            offset,
            is_dragging: true,
            is_decelerating: false,
        }
    }

    pub const fn decelerating(offset: Point) -> Self {
        Self {
            offset,
            is_dragging: false,
            is_decelerating: true,
        }
    }

    /// An offset change with no touch interaction (programmatic scrolling, bounce settling).
    pub const fn idle(offset: Point) -> Self {
        Self {
            offset,
            is_dragging: false,
            is_decelerating: false,
        }
    }

    /// Dragging wins over decelerating when a host reports both.
    pub fn motion(&self) -> crate::Motion {
        if self.is_dragging {
            crate::Motion::Dragging
        } else if self.is_decelerating {
            crate::Motion::Decelerating
        } else {
            crate::Motion::Idle
        }
    }
}
