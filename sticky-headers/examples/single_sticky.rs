// Example: a contact list grouped by initial, with a search row that has no header.
use sticky_headers::{
    ChildGeom, HeaderAdapter, HeaderCanvas, HeaderId, HeaderPlacement, HeaderView, MeasureSpec,
    NO_HEADER_ID, ParentGeometry, Size, StickyHeaderBuilder, ViewportWindow,
};

const NAMES: &[&str] = &[
    "<search>", "Ada", "Alan", "Anita", "Barbara", "Bjarne", "Brian", "Charles", "Claude",
    "Dennis", "Donald", "Edsger", "Frances", "Grace", "Guido", "Hedy", "Ken", "Linus", "Niklaus",
];

const ROW: i32 = 1;

struct Banner {
    text: String,
}

impl HeaderView for Banner {
    fn measure(&mut self, spec: MeasureSpec) -> Size {
        Size {
            width: spec.width,
            height: 1,
        }
    }
}

struct Contacts;

impl HeaderAdapter for Contacts {
    type Header = Banner;

    fn item_count(&self) -> usize {
        NAMES.len()
    }

    fn header_id(&self, position: usize) -> HeaderId {
        if position == 0 {
            return NO_HEADER_ID;
        }
        NAMES[position].as_bytes()[0] as HeaderId
    }

    fn create_header(&self, _parent: &ParentGeometry) -> Banner {
        Banner {
            text: String::new(),
        }
    }

    fn bind_header(&self, header: &mut Banner, position: usize) {
        header.text = format!("-- {} --", &NAMES[position][..1]);
    }
}

struct Printer;

impl HeaderCanvas<Banner> for Printer {
    fn draw_header(&mut self, header: &Banner, placement: &HeaderPlacement) {
        println!(
            "  y={:>3} {:?} {}",
            placement.top(),
            placement.layer,
            header.text
        );
    }
}

fn main() {
    let parent = ParentGeometry::new(40, 8);
    let mut headers = StickyHeaderBuilder::new(Contacts).build();

    // Content-space layout: each row sits below the space it reserves for its header.
    let mut tops = Vec::with_capacity(NAMES.len());
    let mut y = 0;
    for position in 0..NAMES.len() {
        let reserve = headers
            .reserve_space(Some(position), &parent)
            .expect("position in range")
            .top;
        y += reserve;
        tops.push((y, reserve));
        y += ROW;
    }

    for scroll in [0, 3, 5, 6, 9] {
        let mut window = ViewportWindow::new(parent);
        for (position, &(top, reserve)) in tops.iter().enumerate() {
            let top = top - scroll;
            if top + ROW > 0 && top - reserve < parent.height {
                window.push(ChildGeom::new(position, top, ROW).with_horizontal(0, parent.width));
            }
        }

        println!("scroll={scroll}");
        headers
            .paint(&window, &mut Printer)
            .expect("window positions in range");
    }
}
