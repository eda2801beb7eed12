use scroll_loader::{
    ConfigError, DEFAULT_LOADER_EXTENT, EdgeInsets, LoaderDataSource, LoaderDelegate, Rect,
    ScrollGeometry, ScrollLoadStateController, ScrollSurface, StateConfiguration,
};

use crate::attach_source;

pub type HorizontalPaginationController<L> =
    ScrollLoadStateController<HorizontalPaginationSource, L>;

/// How far a horizontal offset has moved past the trailing edge of the content.
pub fn offset_from_trailing_edge(offset: f64, geometry: &ScrollGeometry) -> f64 {
    let max_offset = (geometry.content_size.width - geometry.viewport_size.width).max(0.0);
    offset - max_offset
}

/// Load-more at the trailing (right) edge of a horizontally scrolling surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalPaginationSource {
    config: StateConfiguration,
}

impl HorizontalPaginationSource {
    /// Loader column of [`DEFAULT_LOADER_EXTENT`] spanning the viewport height. Commits as soon
    /// as the content is pulled past its trailing edge.
    pub fn default_config(viewport_height: f64) -> StateConfiguration {
        StateConfiguration::new(
            0.0,
            0.0,
            Rect::new(0.0, 0.0, DEFAULT_LOADER_EXTENT, viewport_height),
        )
    }

    pub fn new(config: StateConfiguration) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StateConfiguration {
        &self.config
    }

    pub fn attach<S, L>(
        surface: &mut S,
        delegate: L,
        config: Option<StateConfiguration>,
    ) -> Result<HorizontalPaginationController<L>, ConfigError>
    where
        S: ScrollSurface + ?Sized,
        L: LoaderDelegate,
    {
        let config = config
            .unwrap_or_else(|| Self::default_config(surface.geometry().viewport_size.height));
        let source = Self::new(config)?;
        pdebug!(
            threshold_start_loading = config.threshold_start_loading,
            "HorizontalPaginationSource::attach"
        );
        Ok(attach_source(surface, source, &config, delegate))
    }
}

impl LoaderDataSource for HorizontalPaginationSource {
    fn observes_vertical_axis(&self) -> bool {
        false
    }

    fn should_initiate(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        offset_from_trailing_edge(offset, geometry) > self.config.threshold_initiate_loading
    }

    fn should_commit_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        offset_from_trailing_edge(offset, geometry) > self.config.threshold_start_loading
    }

    fn should_cancel_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        offset_from_trailing_edge(offset, geometry) < self.config.threshold_start_loading
    }

    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect {
        self.config.loader_frame = self
            .config
            .loader_frame
            .with_origin_x(geometry.content_size.width);
        self.config.loader_frame
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        let width = self.config.loader_frame.size.width;
        geometry
            .content_inset
            .with_right(if inserting { width } else { -width })
    }
}
