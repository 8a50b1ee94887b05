use crate::HeaderPlacement;

/// The drawing surface a [`crate::StickyHeaders`] paints onto.
///
/// The placement carries viewport-relative bounds; implementations translate to
/// `placement.bounds.left/top` and draw the view there.
pub trait HeaderCanvas<H: ?Sized, S: ?Sized = H> {
    fn draw_header(&mut self, header: &H, placement: &HeaderPlacement);

    /// Only called by double-level decorations.
    fn draw_sub_header(&mut self, _sub_header: &S, _placement: &HeaderPlacement) {}
}

impl<H: ?Sized, S: ?Sized, C: HeaderCanvas<H, S> + ?Sized> HeaderCanvas<H, S> for &mut C {
    fn draw_header(&mut self, header: &H, placement: &HeaderPlacement) {
        (**self).draw_header(header, placement);
    }

    fn draw_sub_header(&mut self, sub_header: &S, placement: &HeaderPlacement) {
        (**self).draw_sub_header(sub_header, placement);
    }
}
