// Example: loading pages at the bottom of a list until the data runs out.
use scroll_loader::{
    ControllerId, EdgeInsets, InsetTransition, LoadCompletion, LoaderDelegate, OffsetEvent,
    Point, ScrollGeometry, ScrollSurface, Size,
};
use scroll_loader_presets::{PaginationSource, offset_from_bottom};

const ROW: f64 = 44.0;
const PAGE: usize = 20;

struct List {
    rows: usize,
    offset: Point,
    inset: EdgeInsets,
}

impl ScrollSurface for List {
    fn geometry(&self) -> ScrollGeometry {
        ScrollGeometry {
            content_size: Size::new(375.0, self.rows as f64 * ROW),
            viewport_size: Size::new(375.0, 667.0),
            content_inset: self.inset,
        }
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn set_content_inset(&mut self, inset: EdgeInsets, _transition: InsetTransition) {
        self.inset = inset;
    }

    fn add_offset_observer(&mut self, _id: ControllerId) {}

    fn remove_offset_observer(&mut self, _id: ControllerId) {}
}

#[derive(Default)]
struct Pager {
    pages: usize,
    pending: Option<LoadCompletion>,
}

impl LoaderDelegate for Pager {
    fn should_start_loading(&mut self, _controller: ControllerId) -> bool {
        self.pages < 3
    }

    fn did_start_loading(&mut self, _controller: ControllerId, completion: LoadCompletion) {
        self.pages += 1;
        self.pending = Some(completion);
    }
}

fn main() {
    let mut list = List {
        rows: PAGE,
        offset: Point::default(),
        inset: EdgeInsets::ZERO,
    };
    let mut c = match PaginationSource::attach(&mut list, Pager::default(), None) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    for round in 0..5 {
        // Drag 80pt past the last row, then release.
        let geometry = list.geometry();
        let end = (geometry.content_size.height - geometry.viewport_size.height).max(0.0);
        list.offset = Point::new(0.0, end + 80.0);
        let (drag, release) = (
            OffsetEvent::dragging(list.offset),
            OffsetEvent::decelerating(list.offset),
        );
        c.on_offset_changed(&mut list, drag);
        c.on_offset_changed(&mut list, release);
        println!(
            "round {round}: past bottom by {}, phase {}",
            offset_from_bottom(list.offset.y, &geometry),
            c.phase()
        );

        if let Some(done) = c.delegate_mut().pending.take() {
            list.rows += PAGE;
            if let Err(err) = c.complete_loading(&mut list, done, 0) {
                eprintln!("{err}");
            }
            c.tick(u64::MAX);
        }
        println!("  rows={} inset.bottom={}", list.rows, list.inset.bottom);
    }

    c.detach(&mut list);
}
