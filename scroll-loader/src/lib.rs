//! A headless, edge-triggered scroll loader for pull-to-refresh and pagination.
//!
//! For ready-made refresh and pagination data sources, see the `scroll-loader-presets` crate.
//!
//! The core is [`ScrollLoadStateController`], a small state machine that watches a stream of
//! scroll offset changes and walks through [`Phase::Normal`] → [`Phase::Ready`] →
//! [`Phase::WillBeLoading`] → [`Phase::Loading`], reserving loader space with a content inset
//! while a caller-supplied load runs.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`ScrollSurface`] (geometry, content offset, content inset)
//! - offset change events with drag/decelerate flags
//! - a [`LoaderDataSource`] (thresholds, loader frame and insets) and a [`LoaderDelegate`]
//!
//! The transition table itself is pure: see [`Phase::on`] and [`Phase::decide`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod delegate;
mod options;
mod phase;
mod source;
mod surface;
mod types;

#[cfg(test)]
mod tests;

pub use controller::ScrollLoadStateController;
pub use delegate::{CompletionError, ControllerId, LoadCompletion, LoaderDelegate};
pub use options::{ConfigError, ControllerOptions, StateConfiguration};
pub use phase::{Motion, Phase, PhaseEvent, TransitionError};
pub use source::LoaderDataSource;
pub use surface::{InsetTransition, LoadingIndicator, ScrollSurface};
pub use types::{
    Axis, DEFAULT_LOADER_EXTENT, EdgeInsets, OffsetEvent, Point, Rect, ScrollGeometry, Size,
};
