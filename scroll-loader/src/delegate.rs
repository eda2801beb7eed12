use alloc::boxed::Box;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::LoadingIndicator;

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one controller instance in delegate callbacks and completion tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One-shot token handed to [`LoaderDelegate::did_start_loading`].
///
/// Hand it back through [`crate::ScrollLoadStateController::complete_loading`] once the load
/// resolves. The token can be neither cloned nor constructed outside this crate, so each load
/// completes at most once. Dropping it leaves the controller in [`crate::Phase::Loading`] for
/// good; there is no timeout.
#[must_use = "the controller stays in `Loading` until this token is handed back"]
#[derive(Debug, PartialEq, Eq)]
pub struct LoadCompletion {
    controller: ControllerId,
    generation: u64,
}

impl LoadCompletion {
    pub(crate) fn new(controller: ControllerId, generation: u64) -> Self {
        Self {
            controller,
            generation,
        }
    }

    pub fn controller(&self) -> ControllerId {
        self.controller
    }

    /// The load cycle this token belongs to, counting from 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// The token was handed to the wrong controller. It is returned untouched so it can still
    /// reach its owner.
    #[error("completion belongs to controller {found}, not {expected}")]
    ForeignController {
        expected: ControllerId,
        found: ControllerId,
        completion: LoadCompletion,
    },
}

impl CompletionError {
    pub fn into_completion(self) -> LoadCompletion {
        match self {
            Self::ForeignController { completion, .. } => completion,
        }
    }
}

/// Lifecycle callbacks of a [`crate::ScrollLoadStateController`].
///
/// Only [`did_start_loading`](Self::did_start_loading) is required.
pub trait LoaderDelegate {
    /// Fired on every observation whose offset satisfies
    /// [`crate::LoaderDataSource::should_initiate`], regardless of phase.
    fn will_start_loading(&mut self, controller: ControllerId, indicator: &LoadingIndicator) {
        let _ = (controller, indicator);
    }

    /// Veto hook, asked once per release. Returning false cancels the cycle before any inset
    /// change.
    fn should_start_loading(&mut self, controller: ControllerId) -> bool {
        let _ = controller;
        true
    }

    fn did_start_loading(&mut self, controller: ControllerId, completion: LoadCompletion);

    /// Fired once the inset removal that follows a completed load has finished.
    fn did_finish_loading(&mut self, controller: ControllerId) {
        let _ = controller;
    }
}

impl<T: LoaderDelegate + ?Sized> LoaderDelegate for &mut T {
    fn will_start_loading(&mut self, controller: ControllerId, indicator: &LoadingIndicator) {
        (**self).will_start_loading(controller, indicator);
    }

    fn should_start_loading(&mut self, controller: ControllerId) -> bool {
        (**self).should_start_loading(controller)
    }

    fn did_start_loading(&mut self, controller: ControllerId, completion: LoadCompletion) {
        (**self).did_start_loading(controller, completion);
    }

    fn did_finish_loading(&mut self, controller: ControllerId) {
        (**self).did_finish_loading(controller);
    }
}

impl<T: LoaderDelegate + ?Sized> LoaderDelegate for Box<T> {
    fn will_start_loading(&mut self, controller: ControllerId, indicator: &LoadingIndicator) {
        (**self).will_start_loading(controller, indicator);
    }

    fn should_start_loading(&mut self, controller: ControllerId) -> bool {
        (**self).should_start_loading(controller)
    }

    fn did_start_loading(&mut self, controller: ControllerId, completion: LoadCompletion) {
        (**self).did_start_loading(controller, completion);
    }

    fn did_finish_loading(&mut self, controller: ControllerId) {
        (**self).did_finish_loading(controller);
    }
}

/// An absent delegate vetoes every load.
impl<T: LoaderDelegate> LoaderDelegate for Option<T> {
    fn will_start_loading(&mut self, controller: ControllerId, indicator: &LoadingIndicator) {
        if let Some(d) = self {
            d.will_start_loading(controller, indicator);
        }
    }

    fn should_start_loading(&mut self, controller: ControllerId) -> bool {
        self.as_mut()
            .is_some_and(|d| d.should_start_loading(controller))
    }

    fn did_start_loading(&mut self, controller: ControllerId, completion: LoadCompletion) {
        if let Some(d) = self {
            d.did_start_loading(controller, completion);
        }
    }

    fn did_finish_loading(&mut self, controller: ControllerId) {
        if let Some(d) = self {
            d.did_finish_loading(controller);
        }
    }
}
