// Example: inline headers drawn over the first row of each section, fed from content-space extents.
use sticky_headers::{
    HeaderAdapter, HeaderId, HeaderView, Layer, MeasureSpec, ParentGeometry, Size,
    StickyHeaderBuilder, ViewportWindow,
};

struct Tag {
    label: String,
}

impl HeaderView for Tag {
    fn measure(&mut self, spec: MeasureSpec) -> Size {
        Size {
            width: (self.label.len() as i32).min(spec.width),
            height: 2,
        }
    }
}

/// 200 rows of height 3, grouped in tens.
struct Log;

impl HeaderAdapter for Log {
    type Header = Tag;

    fn item_count(&self) -> usize {
        200
    }

    fn header_id(&self, position: usize) -> HeaderId {
        (position / 10) as HeaderId
    }

    fn create_header(&self, _parent: &ParentGeometry) -> Tag {
        Tag {
            label: String::new(),
        }
    }

    fn bind_header(&self, header: &mut Tag, position: usize) {
        header.label = format!("[batch {}]", position / 10);
    }
}

fn main() {
    const ROW: u32 = 3;
    let parent = ParentGeometry::new(60, 12);
    let mut headers = StickyHeaderBuilder::new(Log).render_inline(true).build();

    // Inline headers take no layout space, so item extents are plain multiples of the row height.
    assert_eq!(headers.reserve_space(Some(10), &parent).map(|o| o.top), Ok(0));

    for scroll in [0u64, 20, 25, 28, 30] {
        let first = (scroll / ROW as u64) as usize;
        let last = ((scroll + parent.height as u64) / ROW as u64) as usize;
        let items = (first..=last.min(199)).map(|i| (i, i as u64 * ROW as u64, ROW));
        let window = ViewportWindow::from_virtual_items(parent, scroll, items);

        let placements = headers.frame(&window).expect("window positions in range");
        let pinned: Vec<_> = placements
            .iter()
            .filter(|p| p.layer == Layer::Over)
            .map(|p| (p.id, p.top()))
            .collect();
        println!("scroll={scroll:>2} headers(id, y)={pinned:?}");
    }
}
