use scroll_loader::{
    ConfigError, DEFAULT_LOADER_EXTENT, EdgeInsets, LoaderDataSource, LoaderDelegate, Rect,
    ScrollGeometry, ScrollLoadStateController, ScrollSurface, StateConfiguration,
};

use crate::attach_source;

pub type RefreshController<L> = ScrollLoadStateController<RefreshSource, L>;

/// Pull-to-refresh at the top edge.
///
/// Thresholds compare against the raw vertical content offset, which goes negative as the
/// content is pulled down past its top.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefreshSource {
    config: StateConfiguration,
}

impl RefreshSource {
    /// Loader strip of [`DEFAULT_LOADER_EXTENT`] just above the content, committing once pulled
    /// its full height.
    pub fn default_config(viewport_width: f64) -> StateConfiguration {
        StateConfiguration::new(
            0.0,
            -DEFAULT_LOADER_EXTENT,
            Rect::new(
                0.0,
                -DEFAULT_LOADER_EXTENT,
                viewport_width,
                DEFAULT_LOADER_EXTENT,
            ),
        )
    }

    pub fn new(config: StateConfiguration) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StateConfiguration {
        &self.config
    }

    /// Builds a refresh controller on `surface`, using [`Self::default_config`] sized to the
    /// viewport when `config` is `None`.
    pub fn attach<S, L>(
        surface: &mut S,
        delegate: L,
        config: Option<StateConfiguration>,
    ) -> Result<RefreshController<L>, ConfigError>
    where
        S: ScrollSurface + ?Sized,
        L: LoaderDelegate,
    {
        let config = config
            .unwrap_or_else(|| Self::default_config(surface.geometry().viewport_size.width));
        let source = Self::new(config)?;
        pdebug!(
            threshold_start_loading = config.threshold_start_loading,
            "RefreshSource::attach"
        );
        Ok(attach_source(surface, source, &config, delegate))
    }
}

impl LoaderDataSource for RefreshSource {
    fn should_initiate(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        offset < self.config.threshold_initiate_loading
    }

    fn should_commit_on_release(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        offset < self.config.threshold_start_loading
    }

    fn should_cancel_on_release(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        offset > self.config.threshold_start_loading
    }

    fn loader_frame(&mut self, _geometry: &ScrollGeometry) -> Rect {
        self.config.loader_frame
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        let height = self.config.loader_frame.size.height;
        geometry
            .content_inset
            .with_top(if inserting { height } else { -height })
    }
}
