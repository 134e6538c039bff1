// Example: drive a tracker from a simulated scroll gesture and a host timer.
use std::sync::{Arc, Mutex};

use infinity::{ClientRect, Container, Element, Tracker, TrackerOptions};

#[derive(Clone, Debug)]
struct Row {
    index: usize,
    scroll: Arc<Mutex<f64>>,
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Element for Row {
    fn bounding_client_rect(&self) -> ClientRect {
        let scroll = *self.scroll.lock().unwrap();
        ClientRect::new(self.index as f64 * 50.0 - scroll, 0.0, 400.0, 50.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Pane;

impl Element for Pane {
    fn bounding_client_rect(&self) -> ClientRect {
        ClientRect::new(0.0, 0.0, 400.0, 200.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Node {
    Pane(Pane),
    Row(Row),
}

impl Element for Node {
    fn bounding_client_rect(&self) -> ClientRect {
        match self {
            Node::Pane(p) => p.bounding_client_rect(),
            Node::Row(r) => r.bounding_client_rect(),
        }
    }
}

fn main() {
    let scroll = Arc::new(Mutex::new(0.0));
    let opts = TrackerOptions::new().with_throttle_ms(200).with_debounce_ms(100);
    let mut t: Tracker<Node, usize> =
        Tracker::with_options(Container::Element(Node::Pane(Pane)), opts);
    t.loading(|| println!("-- loading"))
        .load(|_, args| println!("load row {}", args[0]))
        .unloading(|| println!("-- unloading"))
        .unload(|_, args| println!("unload row {}", args[0]));

    for index in 0..100 {
        let row = Row {
            index,
            scroll: Arc::clone(&scroll),
        };
        t.add(Node::Row(row), [index]);
    }
    t.refresh();

    // A 16ms-per-frame fling: the throttle refreshes every 200ms, the debounce settles it.
    let mut now = 0u64;
    for frame in 0..40 {
        *scroll.lock().unwrap() = frame as f64 * 40.0;
        if t.on_scroll(now) {
            println!("throttled refresh at {now}ms");
        }
        now += 16;
    }
    while let Some(deadline) = t.next_deadline() {
        now = now.max(deadline);
        if t.tick(now) {
            println!("debounced refresh at {now}ms");
        }
    }

    t.unbind();
    println!("bound={}", t.is_bound());
}
