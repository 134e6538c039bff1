// Example: track a few fixed rows against a window container.
use infinity::{ClientRect, Container, Element, Size, Tracker, WindowMetrics};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Row(ClientRect);

impl Element for Row {
    fn bounding_client_rect(&self) -> ClientRect {
        self.0
    }
}

struct Window;

impl WindowMetrics for Window {
    fn inner_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn document_client_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }
}

fn main() {
    let mut t: Tracker<Row, &'static str> = Tracker::new(Container::window(Window));
    t.load(|row, args| println!("load {:?} args={:?}", row.0, args))
        .unload(|row, args| println!("unload {:?} args={:?}", row.0, args))
        .margin(100.0);

    for (i, name) in ["header", "hero", "footer"].into_iter().enumerate() {
        let row = Row(ClientRect::new(i as f64 * 400.0, 0.0, 800.0, 300.0));
        t.add(row, [name]);
    }

    let report = t.refresh_report();
    println!("box={:?} report={:?}", t.cached_box(), report);
}
