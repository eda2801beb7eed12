use scroll_loader::{
    ConfigError, DEFAULT_LOADER_EXTENT, EdgeInsets, LoaderDataSource, LoaderDelegate, Rect,
    ScrollGeometry, ScrollLoadStateController, ScrollSurface, StateConfiguration,
};

use crate::attach_source;

pub type PaginationController<L> = ScrollLoadStateController<PaginationSource, L>;

/// How far a vertical offset has moved past the bottom of the content.
///
/// Zero when the last row is flush with the bottom of the viewport; positive once pulled beyond
/// it. Content shorter than the viewport counts from the top.
pub fn offset_from_bottom(offset: f64, geometry: &ScrollGeometry) -> f64 {
    let max_offset = (geometry.content_size.height - geometry.viewport_size.height).max(0.0);
    offset - max_offset
}

/// Load-more at the bottom edge.
///
/// Thresholds compare against [`offset_from_bottom`]. The loader frame tracks the content
/// height, so it stays just below the last row as pages arrive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationSource {
    config: StateConfiguration,
}

impl PaginationSource {
    pub fn default_config(viewport_width: f64) -> StateConfiguration {
        StateConfiguration::new(
            0.0,
            DEFAULT_LOADER_EXTENT,
            Rect::new(0.0, 0.0, viewport_width, DEFAULT_LOADER_EXTENT),
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
    ) -> Result<PaginationController<L>, ConfigError>
    where
        S: ScrollSurface + ?Sized,
        L: LoaderDelegate,
    {
        let config = config
            .unwrap_or_else(|| Self::default_config(surface.geometry().viewport_size.width));
        let source = Self::new(config)?;
        pdebug!(
            threshold_start_loading = config.threshold_start_loading,
            "PaginationSource::attach"
        );
        Ok(attach_source(surface, source, &config, delegate))
    }
}

impl LoaderDataSource for PaginationSource {
    fn should_initiate(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        offset_from_bottom(offset, geometry) > self.config.threshold_initiate_loading
    }

    fn should_commit_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        offset_from_bottom(offset, geometry) > self.config.threshold_start_loading
    }

    fn should_cancel_on_release(&self, offset: f64, geometry: &ScrollGeometry) -> bool {
        offset_from_bottom(offset, geometry) < self.config.threshold_start_loading
    }

    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect {
        self.config.loader_frame = self
            .config
            .loader_frame
            .with_origin_y(geometry.content_size.height);
        self.config.loader_frame
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        let height = self.config.loader_frame.size.height;
        geometry
            .content_inset
            .with_bottom(if inserting { height } else { -height })
    }
}
