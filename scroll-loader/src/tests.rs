use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

const EXTENT: f64 = DEFAULT_LOADER_EXTENT;

#[derive(Debug, Default)]
struct MockSurface {
    geometry: ScrollGeometry,
    offset: Point,
    observers: Vec<ControllerId>,
    removed: Vec<ControllerId>,
    insets: Vec<(EdgeInsets, InsetTransition)>,
    offsets_set: Vec<Point>,
    indicators: Vec<LoadingIndicator>,
}

impl MockSurface {
    fn new() -> Self {
        Self {
            geometry: ScrollGeometry {
                content_size: Size::new(320.0, 1000.0),
                viewport_size: Size::new(320.0, 480.0),
                content_inset: EdgeInsets::ZERO,
            },
            ..Self::default()
        }
    }

    /// Scrolls to `y` and builds the matching event.
    fn drag(&mut self, y: f64) -> OffsetEvent {
        self.offset = Point::new(0.0, y);
        OffsetEvent::dragging(self.offset)
    }

    fn decelerate(&mut self, y: f64) -> OffsetEvent {
        self.offset = Point::new(0.0, y);
        OffsetEvent::decelerating(self.offset)
    }
}

impl ScrollSurface for MockSurface {
    fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
        self.offsets_set.push(offset);
    }

    fn set_content_inset(&mut self, inset: EdgeInsets, transition: InsetTransition) {
        self.geometry.content_inset = inset;
        self.insets.push((inset, transition));
    }

    fn add_offset_observer(&mut self, id: ControllerId) {
        self.observers.push(id);
    }

    fn remove_offset_observer(&mut self, id: ControllerId) {
        let pos = self.observers.iter().position(|o| *o == id);
        assert!(pos.is_some(), "removing unregistered observer {id}");
        self.observers.retain(|o| *o != id);
        self.removed.push(id);
    }

    fn update_loading_indicator(&mut self, indicator: &LoadingIndicator) {
        self.indicators.push(*indicator);
    }
}

/// Refresh-at-top style source measuring the raw offset.
#[derive(Debug)]
struct TopSource {
    vertical: bool,
    initiate: f64,
    start: f64,
    frame_queries: usize,
    commit_queries: Cell<usize>,
    cancel_queries: Cell<usize>,
}

impl TopSource {
    fn new() -> Self {
        Self {
            vertical: true,
            initiate: 0.0,
            start: -EXTENT,
            frame_queries: 0,
            commit_queries: Cell::new(0),
            cancel_queries: Cell::new(0),
        }
    }
}

impl LoaderDataSource for TopSource {
    fn observes_vertical_axis(&self) -> bool {
        self.vertical
    }

    fn should_initiate(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        offset < self.initiate
    }

    fn should_commit_on_release(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        self.commit_queries.set(self.commit_queries.get() + 1);
        offset < self.start
    }

    fn should_cancel_on_release(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        self.cancel_queries.set(self.cancel_queries.get() + 1);
        offset > self.start
    }

    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect {
        self.frame_queries += 1;
        Rect::new(0.0, -EXTENT, geometry.viewport_size.width, EXTENT)
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        let delta = if inserting { EXTENT } else { -EXTENT };
        geometry.content_inset.with_top(delta)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Call {
    WillStart,
    ShouldStart,
    DidStart(u64),
    DidFinish,
}

#[derive(Debug)]
struct Recorder {
    allow: bool,
    calls: Vec<Call>,
    completion: Option<LoadCompletion>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            allow: true,
            calls: Vec::new(),
            completion: None,
        }
    }

    fn vetoing() -> Self {
        Self {
            allow: false,
            ..Self::new()
        }
    }

    fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn started(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::DidStart(_)))
            .count()
    }

    fn take(&mut self) -> LoadCompletion {
        self.completion.take().expect("no load in flight")
    }
}

impl LoaderDelegate for Recorder {
    fn will_start_loading(&mut self, _controller: ControllerId, _indicator: &LoadingIndicator) {
        self.calls.push(Call::WillStart);
    }

    fn should_start_loading(&mut self, _controller: ControllerId) -> bool {
        self.calls.push(Call::ShouldStart);
        self.allow
    }

    fn did_start_loading(&mut self, _controller: ControllerId, completion: LoadCompletion) {
        self.calls.push(Call::DidStart(completion.generation()));
        assert!(self.completion.replace(completion).is_none());
    }

    fn did_finish_loading(&mut self, _controller: ControllerId) {
        self.calls.push(Call::DidFinish);
    }
}

type TestController = ScrollLoadStateController<TopSource, Recorder>;

fn attach(surface: &mut MockSurface, delegate: Recorder) -> TestController {
    ScrollLoadStateController::attach(
        surface,
        TopSource::new(),
        delegate,
        ControllerOptions::new(),
    )
}

/// Drags past the commit boundary and releases.
fn pull_and_release(c: &mut TestController, s: &mut MockSurface) {
    for y in [-10.0, -40.0, -70.0] {
        let e = s.drag(y);
        c.on_offset_changed(s, e);
    }
    assert_eq!(c.phase(), Phase::Ready);
    let e = s.decelerate(-70.0);
    c.on_offset_changed(s, e);
}

#[test]
fn transition_table_only_allows_the_loading_cycle() {
    use Phase::*;
    use PhaseEvent::*;

    let phases = [Normal, Ready, WillBeLoading, Loading];
    let events = [Arm, Disarm, Release, Veto, BeginLoad, FinishLoad];
    let legal = [
        (Normal, Arm, Ready),
        (Ready, Disarm, Normal),
        (Ready, Release, WillBeLoading),
        (WillBeLoading, Veto, Normal),
        (WillBeLoading, BeginLoad, Loading),
        (Loading, FinishLoad, Normal),
    ];

    for from in phases {
        for event in events {
            let expected = legal
                .iter()
                .find(|(f, e, _)| *f == from && *e == event)
                .map(|(_, _, to)| *to);
            match (from.on(event), expected) {
                (Ok(to), Some(want)) => assert_eq!(to, want),
                (Err(err), None) => {
                    assert_eq!(err, TransitionError { from, event });
                }
                (got, want) => panic!("{from:?} + {event:?}: got {got:?}, want {want:?}"),
            }
        }
    }
}

#[test]
fn decide_only_evaluates_the_predicate_it_needs() {
    let counts = Cell::new((0, 0));
    let asked = &counts;
    let commit = |v: bool| {
        move || {
            let (c, x) = asked.get();
            asked.set((c + 1, x));
            v
        }
    };
    let cancel = |v: bool| {
        move || {
            let (c, x) = asked.get();
            asked.set((c, x + 1));
            v
        }
    };

    assert_eq!(
        Phase::Normal.decide(Motion::Dragging, commit(true), cancel(true)),
        Some(PhaseEvent::Arm)
    );
    assert_eq!(asked.get(), (1, 0));

    assert_eq!(
        Phase::Ready.decide(Motion::Dragging, commit(true), cancel(false)),
        None
    );
    assert_eq!(asked.get(), (1, 1));

    assert_eq!(
        Phase::Ready.decide(Motion::Decelerating, commit(false), cancel(false)),
        Some(PhaseEvent::Release)
    );
    assert_eq!(
        Phase::Normal.decide(Motion::Decelerating, commit(true), cancel(true)),
        None
    );
    assert_eq!(
        Phase::Ready.decide(Motion::Idle, commit(true), cancel(true)),
        None
    );
    for phase in [Phase::WillBeLoading, Phase::Loading] {
        for motion in [Motion::Dragging, Motion::Decelerating, Motion::Idle] {
            assert_eq!(phase.decide(motion, commit(true), cancel(true)), None);
        }
    }
    assert_eq!(asked.get(), (1, 1));
}

#[test]
fn phases_are_ordered_by_progress() {
    assert!(Phase::Normal < Phase::Ready);
    assert!(Phase::Ready < Phase::WillBeLoading);
    assert!(Phase::WillBeLoading < Phase::Loading);
    assert_eq!(Phase::default(), Phase::Normal);
}

#[test]
fn dragging_takes_precedence_over_decelerating() {
    let e = OffsetEvent {
        offset: Point::default(),
        is_dragging: true,
        is_decelerating: true,
    };
    assert_eq!(e.motion(), Motion::Dragging);
    assert_eq!(OffsetEvent::idle(Point::default()).motion(), Motion::Idle);
}

#[test]
fn attach_registers_observer_and_installs_indicator() {
    let mut s = MockSurface::new();
    let c = attach(&mut s, Recorder::new());

    assert_eq!(s.observers, vec![c.id()]);
    assert_eq!(c.data_source().frame_queries, 1);
    assert!(c.indicator().is_installed);
    assert!(!c.indicator().is_animating);
    assert_eq!(c.indicator().frame, Rect::new(0.0, -EXTENT, 320.0, EXTENT));
    assert_eq!(s.indicators.len(), 1);
    assert_eq!(c.phase(), Phase::Normal);

    c.detach(&mut s);
}

#[test]
fn attach_without_default_loader_leaves_indicator_off_surface() {
    let mut s = MockSurface::new();
    let mut c = ScrollLoadStateController::attach(
        &mut s,
        TopSource::new(),
        Recorder::new(),
        ControllerOptions::new().with_show_default_loader(false),
    );
    assert!(!c.indicator().is_installed);
    assert_eq!(c.data_source().frame_queries, 0);

    pull_and_release(&mut c, &mut s);
    assert_eq!(c.phase(), Phase::Loading);
    assert!(c.indicator().is_animating);
    assert!(s.indicators.is_empty());

    c.detach(&mut s);
    assert!(s.indicators.is_empty());
}

#[test]
fn detach_removes_observer_exactly_once() {
    let mut s = MockSurface::new();
    let c = attach(&mut s, Recorder::new());
    let id = c.id();
    c.detach(&mut s);

    assert!(s.observers.is_empty());
    assert_eq!(s.removed, vec![id]);
    let last = s.indicators.last().copied().unwrap();
    assert!(!last.is_installed);
}

#[test]
fn controllers_get_distinct_ids() {
    let mut s = MockSurface::new();
    let a = attach(&mut s, Recorder::new());
    let b = attach(&mut s, Recorder::new());
    assert_ne!(a.id(), b.id());
    assert_eq!(s.observers.len(), 2);
    a.detach(&mut s);
    b.detach(&mut s);
    assert!(s.observers.is_empty());
}

#[test]
fn no_pre_commit_signal_outside_the_initiate_zone() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());

    for y in [0.0, 10.0, 250.0, 40.0, 0.0] {
        let e = s.drag(y);
        c.on_offset_changed(&mut s, e);
    }
    let e = s.decelerate(5.0);
    c.on_offset_changed(&mut s, e);

    assert!(c.delegate().calls.is_empty());
    assert_eq!(c.phase(), Phase::Normal);
    c.detach(&mut s);
}

#[test]
fn refresh_cycle_end_to_end() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());

    let e = s.drag(-10.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Normal);
    let e = s.drag(-40.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Normal);
    let e = s.drag(-70.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Ready);
    assert_eq!(c.delegate().count(&Call::WillStart), 3);
    assert!(s.insets.is_empty());

    let e = s.decelerate(-70.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Loading);
    assert!(c.is_loading());
    assert_eq!(c.generation(), 1);
    assert_eq!(
        c.delegate().calls,
        vec![
            Call::WillStart,
            Call::WillStart,
            Call::WillStart,
            Call::WillStart,
            Call::ShouldStart,
            Call::DidStart(1),
        ]
    );

    // Loader space inserted once, content offset restored afterwards.
    assert_eq!(
        s.insets,
        vec![(EdgeInsets::ZERO.with_top(EXTENT), InsetTransition::Immediate)]
    );
    assert_eq!(s.offsets_set, vec![Point::new(0.0, -70.0)]);
    assert!(c.indicator().is_animating);
    assert_eq!(c.data_source().frame_queries, 2);

    let done = c.delegate_mut().take();
    assert_eq!(done.controller(), c.id());
    c.complete_loading(&mut s, done, 1_000).unwrap();

    assert_eq!(c.phase(), Phase::Normal);
    assert!(!c.indicator().is_animating);
    assert_eq!(s.insets.len(), 2);
    assert_eq!(
        s.insets[1],
        (EdgeInsets::ZERO, InsetTransition::Animated { duration_ms: 300 })
    );
    assert!(c.is_finishing());
    assert_eq!(c.delegate().count(&Call::DidFinish), 0);

    assert!(!c.tick(1_100));
    assert!(c.tick(1_300));
    assert!(!c.tick(1_400));
    assert!(!c.is_finishing());
    assert_eq!(c.delegate().count(&Call::DidFinish), 1);
    assert_eq!(s.insets.len(), 2);

    c.detach(&mut s);
}

#[test]
fn cancel_before_release_returns_to_normal() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());

    let e = s.drag(-70.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Ready);

    let e = s.drag(-30.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Normal);

    let e = s.decelerate(-20.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Normal);

    assert_eq!(c.delegate().count(&Call::ShouldStart), 0);
    assert_eq!(c.delegate().started(), 0);
    assert!(s.insets.is_empty());
    c.detach(&mut s);
}

#[test]
fn ready_ignores_commit_predicate_while_dragging() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());

    let e = s.drag(-70.0);
    c.on_offset_changed(&mut s, e);
    let commits = c.data_source().commit_queries.get();
    let e = s.drag(-90.0);
    c.on_offset_changed(&mut s, e);

    assert_eq!(c.phase(), Phase::Ready);
    assert_eq!(c.data_source().commit_queries.get(), commits);
    assert_eq!(c.data_source().cancel_queries.get(), 1);
    c.detach(&mut s);
}

#[test]
fn veto_reverts_without_touching_insets() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::vetoing());

    pull_and_release(&mut c, &mut s);

    assert_eq!(c.phase(), Phase::Normal);
    assert_eq!(c.delegate().count(&Call::ShouldStart), 1);
    assert_eq!(c.delegate().started(), 0);
    assert!(s.insets.is_empty());
    assert!(s.offsets_set.is_empty());
    assert!(!c.indicator().is_animating);
    assert_eq!(c.data_source().frame_queries, 1);
    assert_eq!(c.generation(), 0);

    // A vetoed cycle can be retried.
    c.delegate_mut().allow = true;
    pull_and_release(&mut c, &mut s);
    assert_eq!(c.phase(), Phase::Loading);
    c.detach(&mut s);
}

#[test]
fn loading_ignores_further_pulls_but_keeps_signalling() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());
    pull_and_release(&mut c, &mut s);
    let before = c.delegate().count(&Call::WillStart);

    for y in [-80.0, -120.0, -30.0] {
        let e = s.drag(y);
        c.on_offset_changed(&mut s, e);
    }
    let e = s.decelerate(-100.0);
    c.on_offset_changed(&mut s, e);

    assert_eq!(c.phase(), Phase::Loading);
    assert_eq!(c.delegate().count(&Call::WillStart), before + 4);
    assert_eq!(c.delegate().started(), 1);
    assert_eq!(c.delegate().count(&Call::ShouldStart), 1);
    assert_eq!(s.insets.len(), 1);
    c.detach(&mut s);
}

#[test]
fn idle_offsets_signal_but_never_transition() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());

    c.on_offset_changed(&mut s, OffsetEvent::idle(Point::new(0.0, -100.0)));
    assert_eq!(c.phase(), Phase::Normal);
    assert_eq!(c.delegate().count(&Call::WillStart), 1);

    let e = s.drag(-70.0);
    c.on_offset_changed(&mut s, e);
    c.on_offset_changed(&mut s, OffsetEvent::idle(Point::new(0.0, -70.0)));
    assert_eq!(c.phase(), Phase::Ready);
    assert_eq!(c.delegate().count(&Call::ShouldStart), 0);
    c.detach(&mut s);
}

#[test]
fn deceleration_without_ready_does_nothing() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());

    let e = s.decelerate(-200.0);
    c.on_offset_changed(&mut s, e);
    assert_eq!(c.phase(), Phase::Normal);
    assert_eq!(c.data_source().commit_queries.get(), 0);
    c.detach(&mut s);
}

#[test]
fn horizontal_sources_read_the_x_coordinate() {
    let mut s = MockSurface::new();
    let mut source = TopSource::new();
    source.vertical = false;
    let mut c =
        ScrollLoadStateController::attach(&mut s, source, Recorder::new(), Default::default());

    c.on_offset_changed(&mut s, OffsetEvent::dragging(Point::new(0.0, -100.0)));
    assert_eq!(c.phase(), Phase::Normal);
    assert!(c.delegate().calls.is_empty());

    c.on_offset_changed(&mut s, OffsetEvent::dragging(Point::new(-100.0, 0.0)));
    assert_eq!(c.phase(), Phase::Ready);
    c.detach(&mut s);
}

#[test]
fn completion_with_zero_duration_finishes_immediately() {
    let mut s = MockSurface::new();
    let mut c = ScrollLoadStateController::attach(
        &mut s,
        TopSource::new(),
        Recorder::new(),
        ControllerOptions::new()
            .with_remove_inset_duration_ms(0)
            .with_insert_inset_duration_ms(200),
    );
    pull_and_release(&mut c, &mut s);
    assert_eq!(s.insets[0].1, InsetTransition::Animated { duration_ms: 200 });

    let done = c.delegate_mut().take();
    c.complete_loading(&mut s, done, 0).unwrap();
    assert_eq!(s.insets[1].1, InsetTransition::Immediate);
    assert!(!c.is_finishing());
    assert_eq!(c.delegate().calls.last(), Some(&Call::DidFinish));
    c.detach(&mut s);
}

#[test]
fn foreign_completion_is_rejected_and_returned() {
    let mut s = MockSurface::new();
    let mut a = attach(&mut s, Recorder::new());
    let mut b = attach(&mut s, Recorder::new());
    pull_and_release(&mut a, &mut s);

    let token = a.delegate_mut().take();
    let err = b.complete_loading(&mut s, token, 0).unwrap_err();
    assert!(matches!(
        err,
        CompletionError::ForeignController { expected, found, .. }
            if expected == b.id() && found == a.id()
    ));
    assert_eq!(a.phase(), Phase::Loading);
    assert_eq!(b.phase(), Phase::Normal);
    assert_eq!(s.insets.len(), 1);

    a.complete_loading(&mut s, err.into_completion(), 0).unwrap();
    assert_eq!(a.phase(), Phase::Normal);

    a.detach(&mut s);
    b.detach(&mut s);
}

#[test]
fn next_cycle_flushes_pending_finish_first() {
    let mut s = MockSurface::new();
    let mut c = attach(&mut s, Recorder::new());

    pull_and_release(&mut c, &mut s);
    let done = c.delegate_mut().take();
    c.complete_loading(&mut s, done, 0).unwrap();
    assert!(c.is_finishing());

    pull_and_release(&mut c, &mut s);
    assert!(!c.is_finishing());
    assert_eq!(c.generation(), 2);

    let tail: Vec<_> = c.delegate().calls.iter().rev().take(3).cloned().collect();
    assert_eq!(tail, vec![Call::DidStart(2), Call::ShouldStart, Call::DidFinish]);
    assert!(!c.tick(10_000));
    c.detach(&mut s);
}

#[test]
fn insets_follow_the_surface_between_cycles() {
    let mut s = MockSurface::new();
    s.geometry.content_inset = EdgeInsets::new(20.0, 0.0, 0.0, 0.0);
    let mut c = attach(&mut s, Recorder::new());

    pull_and_release(&mut c, &mut s);
    assert_eq!(s.insets[0].0.top, 20.0 + EXTENT);

    let done = c.delegate_mut().take();
    c.complete_loading(&mut s, done, 0).unwrap();
    assert_eq!(s.insets[1].0.top, 20.0);
    c.detach(&mut s);
}

#[test]
fn absent_delegate_never_starts_a_load() {
    let mut s = MockSurface::new();
    let mut c = ScrollLoadStateController::attach(
        &mut s,
        TopSource::new(),
        None::<Recorder>,
        ControllerOptions::new(),
    );
    for y in [-70.0, -80.0] {
        let e = s.drag(y);
        c.on_offset_changed(&mut s, e);
    }
    let e = s.decelerate(-80.0);
    c.on_offset_changed(&mut s, e);

    assert_eq!(c.phase(), Phase::Normal);
    assert!(s.insets.is_empty());
    c.detach(&mut s);
}

#[test]
fn absent_data_source_never_arms() {
    let mut s = MockSurface::new();
    let mut c = ScrollLoadStateController::attach(
        &mut s,
        None::<TopSource>,
        Recorder::new(),
        ControllerOptions::new(),
    );
    assert_eq!(c.indicator().frame, Rect::default());

    let e = s.drag(-500.0);
    c.on_offset_changed(&mut s, e);
    let e = s.decelerate(-500.0);
    c.on_offset_changed(&mut s, e);

    assert_eq!(c.phase(), Phase::Normal);
    assert!(c.delegate().calls.is_empty());
    c.detach(&mut s);
}

#[test]
fn borrowed_collaborators_work_through_mut_refs() {
    let mut s = MockSurface::new();
    let mut source = TopSource::new();
    let mut delegate = Recorder::new();
    {
        let mut c = ScrollLoadStateController::attach(
            &mut s,
            &mut source,
            &mut delegate,
            ControllerOptions::new(),
        );
        let e = s.drag(-70.0);
        c.on_offset_changed(&mut s, e);
        let e = s.decelerate(-70.0);
        c.on_offset_changed(&mut s, e);
        c.detach(&mut s);
    }
    assert_eq!(delegate.started(), 1);
    assert!(delegate.completion.is_some());
    assert_eq!(source.frame_queries, 2);
}

#[test]
fn state_configuration_validation() {
    let ok = StateConfiguration::new(0.0, -EXTENT, Rect::new(0.0, -EXTENT, 320.0, EXTENT));
    assert!(ok.show_default_loader);
    assert_eq!(ok.validate(), Ok(()));

    assert_eq!(
        ok.with_threshold_start_loading(f64::NAN).validate(),
        Err(ConfigError::NonFiniteThreshold {
            name: "threshold_start_loading"
        })
    );
    assert_eq!(
        ok.with_threshold_initiate_loading(f64::INFINITY).validate(),
        Err(ConfigError::NonFiniteThreshold {
            name: "threshold_initiate_loading"
        })
    );
    assert_eq!(
        ok.with_loader_frame(Rect::new(0.0, f64::NAN, 1.0, 1.0))
            .validate(),
        Err(ConfigError::NonFiniteFrame)
    );
    assert_eq!(
        ok.with_loader_frame(Rect::new(0.0, 0.0, -1.0, 1.0))
            .validate(),
        Err(ConfigError::NegativeLoaderSize)
    );
}

#[test]
fn controller_options_follow_config() {
    let config = StateConfiguration::default().with_show_default_loader(false);
    let options = ControllerOptions::for_config(&config);
    assert!(!options.show_default_loader);
    assert_eq!(options.remove_inset_duration_ms, 300);
    assert_eq!(options.insert_inset_duration_ms, 0);
}
