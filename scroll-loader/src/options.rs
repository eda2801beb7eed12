use crate::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold `{name}` must be finite")]
    NonFiniteThreshold { name: &'static str },
    #[error("loader frame must be finite")]
    NonFiniteFrame,
    #[error("loader frame must not have a negative size")]
    NegativeLoaderSize,
}

/// Thresholds and loader placement for one loading edge.
///
/// Thresholds are signed offsets in whatever space the owning data source measures in (raw
/// content offset for refresh-at-top, distance past the content end for pagination).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateConfiguration {
    /// Crossing this reports "about to enter the loading zone" on every observation.
    pub threshold_initiate_loading: f64,
    /// The release-to-commit boundary.
    pub threshold_start_loading: f64,
    /// Loader placement in the surface's content coordinates.
    pub loader_frame: Rect,
    pub show_default_loader: bool,
}

impl Default for StateConfiguration {
    fn default() -> Self {
        Self::new(0.0, 0.0, Rect::default())
    }
}

impl StateConfiguration {
    pub fn new(
        threshold_initiate_loading: f64,
        threshold_start_loading: f64,
        loader_frame: Rect,
    ) -> Self {
        Self {
            threshold_initiate_loading,
            threshold_start_loading,
            loader_frame,
            show_default_loader: true,
        }
    }

    pub fn with_threshold_initiate_loading(mut self, threshold: f64) -> Self {
        self.threshold_initiate_loading = threshold;
        self
    }

    pub fn with_threshold_start_loading(mut self, threshold: f64) -> Self {
        self.threshold_start_loading = threshold;
        self
    }

    pub fn with_loader_frame(mut self, loader_frame: Rect) -> Self {
        self.loader_frame = loader_frame;
        self
    }

    pub fn with_show_default_loader(mut self, show_default_loader: bool) -> Self {
        self.show_default_loader = show_default_loader;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold_initiate_loading.is_finite() {
            return Err(ConfigError::NonFiniteThreshold {
                name: "threshold_initiate_loading",
            });
        }
        if !self.threshold_start_loading.is_finite() {
            return Err(ConfigError::NonFiniteThreshold {
                name: "threshold_start_loading",
            });
        }
        if !self.loader_frame.is_finite() {
            return Err(ConfigError::NonFiniteFrame);
        }
        if self.loader_frame.size.width < 0.0 || self.loader_frame.size.height < 0.0 {
            return Err(ConfigError::NegativeLoaderSize);
        }
        Ok(())
    }
}

/// Configuration for [`crate::ScrollLoadStateController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    /// Install and drive the controller's own [`crate::LoadingIndicator`]. When false the
    /// indicator is still handed to the delegate but never pushed to the surface.
    pub show_default_loader: bool,
    /// Duration of the inset insertion when a load commits. Zero applies it immediately.
    pub insert_inset_duration_ms: u64,
    /// Duration of the inset removal after a load completes. `did_finish_loading` fires once it
    /// has elapsed (see [`crate::ScrollLoadStateController::tick`]).
    pub remove_inset_duration_ms: u64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            show_default_loader: true,
            insert_inset_duration_ms: 0,
            remove_inset_duration_ms: 300,
        }
    }
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching a [`StateConfiguration`]'s loader preference.
    pub fn for_config(config: &StateConfiguration) -> Self {
        Self::default().with_show_default_loader(config.show_default_loader)
    }

    pub fn with_show_default_loader(mut self, show_default_loader: bool) -> Self {
        self.show_default_loader = show_default_loader;
        self
    }

    pub fn with_insert_inset_duration_ms(mut self, duration_ms: u64) -> Self {
        self.insert_inset_duration_ms = duration_ms;
        self
    }

    pub fn with_remove_inset_duration_ms(mut self, duration_ms: u64) -> Self {
        self.remove_inset_duration_ms = duration_ms;
        self
    }
}
