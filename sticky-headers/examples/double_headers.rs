// Example: month headers with day sub-headers, painted in layers around the rows.
use sticky_headers::{
    ChildGeom, DoubleHeaderAdapter, HeaderAdapter, HeaderCanvas, HeaderId, HeaderPlacement,
    HeaderView, Layer, MeasureSpec, ParentGeometry, Size, StickyHeaderBuilder, SubHeaderId,
    ViewportWindow,
};

const EVENTS: usize = 60;
const PER_DAY: usize = 4;
const DAYS_PER_MONTH: usize = 5;
const ROW: i32 = 2;

struct Text {
    line: String,
    height: i32,
}

impl HeaderView for Text {
    fn measure(&mut self, spec: MeasureSpec) -> Size {
        Size {
            width: spec.width,
            height: self.height,
        }
    }
}

struct Calendar;

impl Calendar {
    fn day(position: usize) -> usize {
        position / PER_DAY
    }

    fn month(position: usize) -> usize {
        Self::day(position) / DAYS_PER_MONTH
    }
}

impl HeaderAdapter for Calendar {
    type Header = Text;

    fn item_count(&self) -> usize {
        EVENTS
    }

    fn header_id(&self, position: usize) -> HeaderId {
        Self::month(position) as HeaderId
    }

    fn create_header(&self, _parent: &ParentGeometry) -> Text {
        Text {
            line: String::new(),
            height: 2,
        }
    }

    fn bind_header(&self, header: &mut Text, position: usize) {
        header.line = format!("Month {}", Self::month(position) + 1);
    }
}

impl DoubleHeaderAdapter for Calendar {
    type SubHeader = Text;

    fn sub_header_id(&self, position: usize) -> SubHeaderId {
        Self::day(position) as SubHeaderId
    }

    fn create_sub_header(&self, _parent: &ParentGeometry) -> Text {
        Text {
            line: String::new(),
            height: 1,
        }
    }

    fn bind_sub_header(&self, sub_header: &mut Text, position: usize) {
        sub_header.line = format!("  day {}", Self::day(position) % DAYS_PER_MONTH + 1);
    }
}

#[derive(Default)]
struct Screen {
    ops: Vec<String>,
}

impl HeaderCanvas<Text> for Screen {
    fn draw_header(&mut self, header: &Text, placement: &HeaderPlacement) {
        self.ops.push(format!("y={:>3} {}", placement.top(), header.line));
    }

    fn draw_sub_header(&mut self, sub_header: &Text, placement: &HeaderPlacement) {
        self.ops
            .push(format!("y={:>3} {}", placement.top(), sub_header.line));
    }
}

fn main() {
    let parent = ParentGeometry::new(32, 16);
    // Months scroll with their rows; days stay pinned.
    let mut headers = StickyHeaderBuilder::new(Calendar)
        .sticky(false)
        .build_double();

    let mut tops = Vec::with_capacity(EVENTS);
    let mut y = 0;
    for position in 0..EVENTS {
        let reserve = headers
            .reserve_space(Some(position), &parent)
            .expect("position in range")
            .top;
        y += reserve;
        tops.push((y, reserve));
        y += ROW;
    }

    for scroll in [0, 8, 12, 40] {
        let mut window = ViewportWindow::new(parent);
        for (position, &(top, reserve)) in tops.iter().enumerate() {
            let top = top - scroll;
            if top + ROW > 0 && top - reserve < parent.height {
                window.push(ChildGeom::new(position, top, ROW).with_horizontal(0, parent.width));
            }
        }

        let mut screen = Screen::default();
        headers
            .paint_layer(&window, &mut screen, Layer::Under)
            .expect("window positions in range");
        screen.ops.push(format!("<{} rows>", window.len()));
        headers
            .paint_layer(&window, &mut screen, Layer::Over)
            .expect("window positions in range");

        println!("scroll={scroll}");
        for op in screen.ops {
            println!("  {op}");
        }
    }
}
