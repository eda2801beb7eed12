use alloc::boxed::Box;

use crate::{EdgeInsets, Rect, ScrollGeometry};

/// Thresholds and geometry for a [`crate::ScrollLoadStateController`].
///
/// Every method is queried fresh on each observation; implementations should not expect the
/// controller to cache results. `offset` is the raw content offset along the observed axis, so
/// edge-relative sources (pagination) derive their own distance from `geometry`.
pub trait LoaderDataSource {
    /// Read offsets from the vertical (`y`) axis when true, horizontal (`x`) otherwise.
    fn observes_vertical_axis(&self) -> bool {
        true
    }

    /// The offset is inside the "about to load" zone.
    fn should_initiate(&self, offset: f64, geometry: &ScrollGeometry) -> bool;

    /// Releasing at this offset would start a load.
    fn should_commit_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool;

    /// The drag moved back far enough to drop readiness.
    fn should_cancel_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool;

    /// Current loader placement. May update and return stored state (e.g. to follow content
    /// growth).
    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect;

    /// Content inset with loader space inserted (`inserting`) or removed.
    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets;
}

impl<T: LoaderDataSource + ?Sized> LoaderDataSource for &mut T {
    fn observes_vertical_axis(&self) -> bool {
        (**self).observes_vertical_axis()
    }

    fn should_initiate(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        (**self).should_initiate(offset, geometry)
    }

    fn should_commit_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        (**self).should_commit_on_release(offset, geometry)
    }

    fn should_cancel_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        (**self).should_cancel_on_release(offset, geometry)
    }

    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect {
        (**self).loader_frame(geometry)
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        (**self).loader_insets(inserting, geometry)
    }
}

impl<T: LoaderDataSource + ?Sized> LoaderDataSource for Box<T> {
    fn observes_vertical_axis(&self) -> bool {
        (**self).observes_vertical_axis()
    }

    fn should_initiate(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        (**self).should_initiate(offset, geometry)
    }

    fn should_commit_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        (**self).should_commit_on_release(offset, geometry)
    }

    fn should_cancel_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        (**self).should_cancel_on_release(offset, geometry)
    }

    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect {
        (**self).loader_frame(geometry)
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        (**self).loader_insets(inserting, geometry)
    }
}

/// An absent data source: no predicate ever holds, so no load can start.
impl<T: LoaderDataSource> LoaderDataSource for Option<T> {
    fn observes_vertical_axis(&self) -> bool {
        self.as_ref().is_none_or(|s| s.observes_vertical_axis())
    }

    fn should_initiate(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        self.as_ref()
            .is_some_and(|s| s.should_initiate(offset, geometry))
    }

    fn should_commit_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        self.as_ref()
            .is_some_and(|s| s.should_commit_on_release(offset, geometry))
    }

    fn should_cancel_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        self.as_ref()
            .is_some_and(|s| s.should_cancel_on_release(offset, geometry))
    }

    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect {
        self.as_mut()
            .map(|s| s.loader_frame(geometry))
            .unwrap_or_default()
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        match self {
            Some(s) => s.loader_insets(inserting, geometry),
            None => geometry.content_inset,
        }
    }
}
