// Example: a simulated pull-to-refresh gesture driven frame by frame.
use scroll_loader::{
    ControllerId, ControllerOptions, EdgeInsets, InsetTransition, LoadCompletion,
    LoaderDataSource, LoaderDelegate, LoadingIndicator, OffsetEvent, Point, Rect,
    ScrollGeometry, ScrollLoadStateController, ScrollSurface, Size,
};

struct Surface {
    geometry: ScrollGeometry,
    offset: Point,
}

impl ScrollSurface for Surface {
    fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn set_content_inset(&mut self, inset: EdgeInsets, transition: InsetTransition) {
        println!("inset -> top={} ({transition:?})", inset.top);
        self.geometry.content_inset = inset;
    }

    fn add_offset_observer(&mut self, id: ControllerId) {
        println!("observing offsets for {id}");
    }

    fn remove_offset_observer(&mut self, id: ControllerId) {
        println!("stopped observing offsets for {id}");
    }

    fn update_loading_indicator(&mut self, indicator: &LoadingIndicator) {
        println!(
            "indicator at y={} animating={}",
            indicator.frame.origin.y, indicator.is_animating
        );
    }
}

struct PullDown;

impl LoaderDataSource for PullDown {
    fn should_initiate(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        offset < 0.0
    }

    fn should_commit_on_release(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        offset < -64.0
    }

    fn should_cancel_on_release(&self, offset: f64, _geometry: &ScrollGeometry) -> bool {
        offset > -64.0
    }

    fn loader_frame(&mut self, geometry: &ScrollGeometry) -> Rect {
        Rect::new(0.0, -64.0, geometry.viewport_size.width, 64.0)
    }

    fn loader_insets(&self, inserting: bool, geometry: &ScrollGeometry) -> EdgeInsets {
        geometry
            .content_inset
            .with_top(if inserting { 64.0 } else { -64.0 })
    }
}

#[derive(Default)]
struct Feed {
    pending: Option<LoadCompletion>,
}

impl LoaderDelegate for Feed {
    fn will_start_loading(&mut self, _controller: ControllerId, indicator: &LoadingIndicator) {
        println!("  pulling (indicator installed: {})", indicator.is_installed);
    }

    fn did_start_loading(&mut self, controller: ControllerId, completion: LoadCompletion) {
        println!("{controller}: fetching newest items");
        self.pending = Some(completion);
    }

    fn did_finish_loading(&mut self, controller: ControllerId) {
        println!("{controller}: refresh finished");
    }
}

fn main() {
    let mut surface = Surface {
        geometry: ScrollGeometry {
            content_size: Size::new(375.0, 2_000.0),
            viewport_size: Size::new(375.0, 667.0),
            content_inset: EdgeInsets::ZERO,
        },
        offset: Point::default(),
    };
    let mut c = ScrollLoadStateController::attach(
        &mut surface,
        PullDown,
        Feed::default(),
        ControllerOptions::new(),
    );

    // The finger drags the content down, then lets go.
    for y in [-12.0, -30.0, -55.0, -72.0, -80.0] {
        surface.offset = Point::new(0.0, y);
        let event = OffsetEvent::dragging(surface.offset);
        c.on_offset_changed(&mut surface, event);
        println!("dragged to {y}: {}", c.phase());
    }
    surface.offset = Point::new(0.0, -70.0);
    let event = OffsetEvent::decelerating(surface.offset);
    c.on_offset_changed(&mut surface, event);
    println!("released: {}", c.phase());

    // The fetch resolves a few frames later.
    let mut now_ms = 0u64;
    if let Some(done) = c.delegate_mut().pending.take() {
        now_ms += 480;
        if let Err(err) = c.complete_loading(&mut surface, done, now_ms) {
            eprintln!("{err}");
        }
    }
    while c.is_finishing() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!("done at t={now_ms}ms: {}", c.phase());

    c.detach(&mut surface);
}
