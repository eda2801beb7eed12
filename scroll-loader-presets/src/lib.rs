//! Ready-made data sources for the `scroll-loader` crate.
//!
//! `scroll-loader` only knows about phases and predicates. This crate provides the three edges
//! most lists need, each with a default [`StateConfiguration`] sized from the surface:
//!
//! - [`RefreshSource`]: pull down past the top to refresh
//! - [`PaginationSource`]: pull up past the bottom to load more
//! - [`HorizontalPaginationSource`]: pull past the trailing edge to load more
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod horizontal;
mod pagination;
mod refresh;


pub use horizontal::{
    HorizontalPaginationController, HorizontalPaginationSource, offset_from_trailing_edge,
};
pub use pagination::{PaginationController, PaginationSource, offset_from_bottom};
pub use refresh::{RefreshController, RefreshSource};

use scroll_loader::{
    ControllerOptions, LoaderDataSource, LoaderDelegate, ScrollLoadStateController,
    ScrollSurface, StateConfiguration,
};

fn attach_source<S, D, L>(
    surface: &mut S,
    source: D,
    config: &StateConfiguration,
    delegate: L,
) -> ScrollLoadStateController<D, L>
where
    S: ScrollSurface + ?Sized,
    D: LoaderDataSource,
    L: LoaderDelegate,
{
    ScrollLoadStateController::attach(
        surface,
        source,
        delegate,
        ControllerOptions::for_config(config),
    )
}
