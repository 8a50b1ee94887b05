// Example: mapping a click to the header drawn under it.
use sticky_headers::{
    DoubleHeaderAdapter, HeaderAdapter, HeaderId, HeaderView, MeasureSpec, ParentGeometry, Size,
    StickyHeaderBuilder, SubHeaderId, ViewportWindow,
};

struct Chip {
    caption: String,
}

impl HeaderView for Chip {
    fn measure(&mut self, spec: MeasureSpec) -> Size {
        Size {
            width: spec.width,
            height: 4,
        }
    }
}

/// Folders of 12 files, files grouped by extension in sixes.
struct Files;

impl HeaderAdapter for Files {
    type Header = Chip;

    fn item_count(&self) -> usize {
        96
    }

    fn header_id(&self, position: usize) -> HeaderId {
        (position / 12) as HeaderId
    }

    fn create_header(&self, _parent: &ParentGeometry) -> Chip {
        Chip {
            caption: String::new(),
        }
    }

    fn bind_header(&self, header: &mut Chip, position: usize) {
        header.caption = format!("folder-{}", position / 12);
    }
}

impl DoubleHeaderAdapter for Files {
    type SubHeader = Chip;

    fn sub_header_id(&self, position: usize) -> SubHeaderId {
        (position / 6) as SubHeaderId
    }

    fn create_sub_header(&self, _parent: &ParentGeometry) -> Chip {
        Chip {
            caption: String::new(),
        }
    }

    fn bind_sub_header(&self, sub_header: &mut Chip, position: usize) {
        let ext = if (position / 6) % 2 == 0 { "rs" } else { "toml" };
        sub_header.caption = format!("*.{ext}");
    }
}

fn main() {
    const ROW: u64 = 5;
    let parent = ParentGeometry::new(120, 40);
    // Sub-headers render over their first row; folder headers reserve space.
    let mut headers = StickyHeaderBuilder::new(Files)
        .render_inline(true)
        .build_double();

    let mut starts = Vec::with_capacity(96);
    let mut y = 0u64;
    for position in 0..96 {
        let reserve = headers
            .reserve_space(Some(position), &parent)
            .expect("position in range")
            .top;
        y += reserve as u64;
        starts.push(y);
        y += ROW;
    }

    let scroll = 50;
    let items = starts
        .iter()
        .enumerate()
        .filter(|&(_, &start)| start + ROW > scroll && start < scroll + parent.height as u64)
        .map(|(position, &start)| (position, start, ROW as u32));
    let window = ViewportWindow::from_virtual_items(parent, scroll, items);
    headers.frame(&window).expect("window positions in range");

    for (x, y) in [(10.0, 1.0), (10.0, 5.0), (10.0, 30.0)] {
        if let Some(hit) = headers.find_sub_header_at(x, y) {
            println!("({x}, {y}) -> sub-header {} {:?} {}", hit.id, hit.bounds, hit.view.caption);
        } else if let Some(hit) = headers.find_header_at(x, y) {
            println!("({x}, {y}) -> header {} {:?} {}", hit.id, hit.bounds, hit.view.caption);
        } else {
            println!("({x}, {y}) -> list item");
        }
    }

    headers.clear_all_caches();
    assert!(headers.find_header_at(10.0, 1.0).is_none());
}
