use crate::{
    Axis, CompletionError, ControllerId, ControllerOptions, InsetTransition, LoadCompletion,
    LoaderDataSource, LoaderDelegate, LoadingIndicator, OffsetEvent, Phase, PhaseEvent,
    ScrollSurface,
};

/// An edge-triggered scroll loader: pull-to-refresh, load-more, or anything else expressed
/// through a [`LoaderDataSource`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_offset_changed` for every offset change of the surface
/// - `complete_loading` when the delegate's load resolves
/// - `tick(now_ms)` each frame/timer tick while an inset removal is running
///
/// All calls must happen on the context that owns the surface. At most one load is in flight
/// per controller; a new cycle cannot begin until the phase is back to [`Phase::Normal`].
#[derive(Debug)]
pub struct ScrollLoadStateController<D, L> {
    id: ControllerId,
    options: ControllerOptions,
    data_source: D,
    delegate: L,
    phase: Phase,
    indicator: LoadingIndicator,
    generation: u64,
    finish_due_ms: Option<u64>,
    attached: bool,
}

impl<D: LoaderDataSource, L: LoaderDelegate> ScrollLoadStateController<D, L> {
    /// Binds a controller to `surface`: registers the offset observer and, with
    /// `options.show_default_loader`, installs the indicator at the data source's frame.
    ///
    /// Pair every `attach` with one [`detach`](Self::detach) on the same surface.
    pub fn attach<S: ScrollSurface + ?Sized>(
        surface: &mut S,
        data_source: D,
        delegate: L,
        options: ControllerOptions,
    ) -> Self {
        let id = ControllerId::next();
        let mut c = Self {
            id,
            options,
            data_source,
            delegate,
            phase: Phase::Normal,
            indicator: LoadingIndicator::default(),
            generation: 0,
            finish_due_ms: None,
            attached: true,
        };
        surface.add_offset_observer(id);
        if options.show_default_loader {
            let geometry = surface.geometry();
            c.indicator.frame = c.data_source.loader_frame(&geometry);
            c.indicator.is_installed = true;
            surface.update_loading_indicator(&c.indicator);
        }
        ldebug!(
            controller = id.get(),
            show_default_loader = options.show_default_loader,
            "ScrollLoadStateController::attach"
        );
        c
    }

    /// Removes the offset observer and consumes the controller.
    ///
    /// A removal animation still running is abandoned; `did_finish_loading` is not delivered.
    pub fn detach<S: ScrollSurface + ?Sized>(mut self, surface: &mut S) {
        surface.remove_offset_observer(self.id);
        self.attached = false;
        if self.indicator.is_installed {
            self.indicator.is_installed = false;
            self.indicator.is_animating = false;
            surface.update_loading_indicator(&self.indicator);
        }
        ldebug!(
            controller = self.id.get(),
            phase = ?self.phase,
            "ScrollLoadStateController::detach"
        );
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether a completed load is still waiting for its inset removal to finish.
    pub fn is_finishing(&self) -> bool {
        self.finish_due_ms.is_some()
    }

    /// Number of loads started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Durations apply from the next commit or completion on.
    pub fn set_options(&mut self, options: ControllerOptions) {
        self.options = options;
    }

    pub fn indicator(&self) -> &LoadingIndicator {
        &self.indicator
    }

    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    pub fn data_source_mut(&mut self) -> &mut D {
        &mut self.data_source
    }

    pub fn delegate(&self) -> &L {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut L {
        &mut self.delegate
    }

    /// Call this for every offset change the surface reports.
    ///
    /// `will_start_loading` fires whenever the offset satisfies `should_initiate`, whatever the
    /// phase. Dragging moves between `Normal` and `Ready`; decelerating out of `Ready` commits
    /// the load. Idle offset changes never alter the phase.
    pub fn on_offset_changed<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: OffsetEvent,
    ) {
        let axis = if self.data_source.observes_vertical_axis() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let offset = event.offset.along(axis);
        let geometry = surface.geometry();
        ltrace!(
            controller = self.id.get(),
            offset,
            is_dragging = event.is_dragging,
            is_decelerating = event.is_decelerating,
            phase = ?self.phase,
            "on_offset_changed"
        );

        if self.data_source.should_initiate(offset, &geometry) {
            self.delegate.will_start_loading(self.id, &self.indicator);
        }

        let source = &self.data_source;
        let next = self.phase.decide(
            event.motion(),
            || source.should_commit_on_release(offset, &geometry),
            || source.should_cancel_on_release(offset, &geometry),
        );
        match next {
            Some(PhaseEvent::Release) => self.commit(surface),
            Some(step) => self.advance(step),
            None => {}
        }
    }

    /// Hands a load's completion token back and starts removing the loader space.
    ///
    /// The inset is set once to `loader_insets(false, ..)`. `did_finish_loading` follows
    /// immediately when `remove_inset_duration_ms` is zero, otherwise on the first
    /// [`tick`](Self::tick) at or after `now_ms + remove_inset_duration_ms`.
    pub fn complete_loading<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        completion: LoadCompletion,
        now_ms: u64,
    ) -> Result<(), CompletionError> {
        if completion.controller() != self.id {
            lwarn!(
                controller = self.id.get(),
                found = completion.controller().get(),
                "complete_loading: token belongs to another controller"
            );
            return Err(CompletionError::ForeignController {
                expected: self.id,
                found: completion.controller(),
                completion,
            });
        }
        debug_assert_eq!(
            completion.generation(),
            self.generation,
            "complete_loading: token from an earlier cycle"
        );

        self.advance(PhaseEvent::FinishLoad);
        self.set_indicator_animating(surface, false);

        let geometry = surface.geometry();
        let inset = self.data_source.loader_insets(false, &geometry);
        let duration_ms = self.options.remove_inset_duration_ms;
        surface.set_content_inset(inset, InsetTransition::from_duration(duration_ms));
        ldebug!(
            controller = self.id.get(),
            generation = self.generation,
            duration_ms,
            "load completed"
        );

        if duration_ms == 0 {
            self.delegate.did_finish_loading(self.id);
        } else {
            self.finish_due_ms = Some(now_ms.saturating_add(duration_ms));
        }
        Ok(())
    }

    /// Advances the inset removal started by `complete_loading`.
    ///
    /// Returns `true` when this call delivered `did_finish_loading`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.finish_due_ms {
            Some(due) if now_ms >= due => {
                self.finish_due_ms = None;
                self.delegate.did_finish_loading(self.id);
                true
            }
            _ => false,
        }
    }

    fn commit<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.finish_due_ms.take().is_some() {
            self.delegate.did_finish_loading(self.id);
        }

        self.advance(PhaseEvent::Release);
        if !self.delegate.should_start_loading(self.id) {
            ldebug!(controller = self.id.get(), "load vetoed by delegate");
            self.advance(PhaseEvent::Veto);
            return;
        }

        let geometry = surface.geometry();
        self.indicator.frame = self.data_source.loader_frame(&geometry);
        self.set_indicator_animating(surface, true);

        // Keep the visible content still while the loader space is inserted.
        let inset = self.data_source.loader_insets(true, &geometry);
        let offset = surface.content_offset();
        surface.set_content_inset(
            inset,
            InsetTransition::from_duration(self.options.insert_inset_duration_ms),
        );
        surface.set_content_offset(offset);

        self.advance(PhaseEvent::BeginLoad);
        self.generation += 1;
        ldebug!(
            controller = self.id.get(),
            generation = self.generation,
            "load started"
        );
        self.delegate
            .did_start_loading(self.id, LoadCompletion::new(self.id, self.generation));
    }

    fn advance(&mut self, event: PhaseEvent) {
        match self.phase.on(event) {
            Ok(next) => {
                ldebug!(
                    controller = self.id.get(),
                    from = ?self.phase,
                    to = ?next,
                    "phase transition"
                );
                self.phase = next;
            }
            Err(err) => {
                lwarn!(controller = self.id.get(), %err, "phase transition rejected");
                debug_assert!(false, "{err}");
            }
        }
    }

    fn set_indicator_animating<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S, on: bool) {
        self.indicator.is_animating = on;
        if self.indicator.is_installed {
            surface.update_loading_indicator(&self.indicator);
        }
    }
}

impl<D, L> Drop for ScrollLoadStateController<D, L> {
    fn drop(&mut self) {
        if self.attached {
            lwarn!(
                controller = self.id.get(),
                "controller dropped without detach; its offset observer is still registered"
            );
        }
    }
}
