use core::fmt;

/// Loading phase of a [`crate::ScrollLoadStateController`], ordered by loading progress.
///
/// - `Normal`: idle; the initial phase.
/// - `Ready`: the offset crossed the commit boundary while the user is dragging; releasing now
///   would start a load.
/// - `WillBeLoading`: released while `Ready`; the loader space is being inserted.
/// - `Loading`: the delegate's load is in flight until its completion token comes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Normal,
    Ready,
    WillBeLoading,
    Loading,
}

/// Inputs of the phase transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseEvent {
    /// A drag crossed the commit boundary.
    Arm,
    /// A drag moved back behind the commit boundary.
    Disarm,
    /// The touch was released while armed.
    Release,
    /// The delegate declined to start loading.
    Veto,
    /// Loader space is in place and the delegate's load is being invoked.
    BeginLoad,
    /// The delegate handed its completion token back.
    FinishLoad,
}

/// Touch interaction state attached to an offset change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    Dragging,
    Decelerating,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("illegal phase transition: {event:?} while {from:?}")]
pub struct TransitionError {
    pub from: Phase,
    pub event: PhaseEvent,
}

impl Phase {
    pub fn is_idle(self) -> bool {
        self == Self::Normal
    }

    /// Applies `event` to the transition table.
    ///
    /// `Normal → Ready → WillBeLoading → Loading → Normal` is the only forward path; `Ready` may
    /// fall back to `Normal` before release, and `WillBeLoading` may be vetoed back to `Normal`.
    pub fn on(self, event: PhaseEvent) -> Result<Phase, TransitionError> {
        use Phase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Normal, Arm) => Ok(Ready),
            (Ready, Disarm) => Ok(Normal),
            (Ready, Release) => Ok(WillBeLoading),
            (WillBeLoading, Veto) => Ok(Normal),
            (WillBeLoading, BeginLoad) => Ok(Loading),
            (Loading, FinishLoad) => Ok(Normal),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    /// Decides which event, if any, an offset observation produces.
    ///
    /// `commit` and `cancel` are the data source's release predicates for the observed offset.
    /// They are only evaluated when the current phase and motion need them:
    /// - dragging in `Normal` asks `commit` to arm,
    /// - dragging in `Ready` asks `cancel` to disarm,
    /// - decelerating in `Ready` releases without asking either.
    ///
    /// `WillBeLoading` and `Loading` ignore observations, as does any idle motion.
    pub fn decide(
        self,
        motion: Motion,
        commit: impl FnOnce() -> bool,
        cancel: impl FnOnce() -> bool,
    ) -> Option<PhaseEvent> {
        match (motion, self) {
            (Motion::Dragging, Phase::Normal) => commit().then_some(PhaseEvent::Arm),
            (Motion::Dragging, Phase::Ready) => cancel().then_some(PhaseEvent::Disarm),
            (Motion::Decelerating, Phase::Ready) => Some(PhaseEvent::Release),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Ready => "ready",
            Self::WillBeLoading => "will-be-loading",
            Self::Loading => "loading",
        })
    }
}
