// Example: an infinite feed that appends a page whenever the last row loads.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use infinity::{ClientRect, TrackerOptions};
use infinity_adapter::{Controller, Surface};

const ROW: f64 = 80.0;
const PAGE: usize = 10;

fn append_page(c: &mut Controller<usize>, next: &mut usize) {
    for _ in 0..PAGE {
        let top = *next as f64 * ROW;
        c.insert(ClientRect::new(top, 0.0, 320.0, ROW), [*next]);
        *next += 1;
    }
}

fn main() {
    let mut c: Controller<usize> = Controller::new(
        Surface::new(320.0, 480.0),
        TrackerOptions::new().with_margin(ROW),
    );
    let mut next = 0usize;
    append_page(&mut c, &mut next);

    let reached_end = Arc::new(AtomicBool::new(false));
    {
        let reached_end = Arc::clone(&reached_end);
        let last_of_page = PAGE - 1;
        c.tracker_mut().load(move |_, args| {
            if args[0] % PAGE == last_of_page {
                reached_end.store(true, Ordering::Relaxed);
            }
        });
    }
    c.refresh();

    let mut now = 0u64;
    for step in 1..=60 {
        c.on_scroll(0.0, step as f64 * 30.0, now);
        if reached_end.swap(false, Ordering::Relaxed) {
            append_page(&mut c, &mut next);
            println!("appended page, rows={}", c.tracker().len());
        }
        now += 16;
    }
    if let Some(deadline) = c.next_deadline() {
        c.tick(deadline);
    }

    let visible: Vec<u64> = c.loaded().map(|el| el.id()).collect();
    println!("scroll={:?} loaded ids={visible:?}", c.surface().scroll_offset());
}
