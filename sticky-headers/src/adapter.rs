use crate::{HeaderId, MeasureSpec, NO_SUB_HEADER_ID, ParentGeometry, Size, SubHeaderId};

/// A realized header presentation (a widget, a pre-rendered line of text, a texture...).
///
/// The decoration never draws views itself; it only measures them once, when they are first
/// created, and hands them to a [`crate::HeaderCanvas`].
pub trait HeaderView {
    /// Measures the view against an exact width and an unconstrained height.
    fn measure(&mut self, spec: MeasureSpec) -> Size;
}

/// Supplies header identities and header views for a list.
///
/// Contract:
/// - `header_id(p)` must be stable for the duration of a frame.
/// - Bound content must be a pure function of the header id. Views are cached per id and bound
///   exactly once, with the position that first needed them; a later position with the same id
///   never rebinds.
/// - [`crate::NO_HEADER_ID`] is reserved and means "this item has no header".
pub trait HeaderAdapter {
    type Header: HeaderView;

    fn item_count(&self) -> usize;

    fn header_id(&self, position: usize) -> HeaderId;

    fn create_header(&self, parent: &ParentGeometry) -> Self::Header;

    /// Never called for a position whose id is [`crate::NO_HEADER_ID`].
    fn bind_header(&self, header: &mut Self::Header, position: usize);
}

/// A [`HeaderAdapter`] that also supplies a second sticky level.
///
/// The same contract applies to sub-headers, with [`crate::NO_SUB_HEADER_ID`] as the sentinel.
pub trait DoubleHeaderAdapter: HeaderAdapter {
    type SubHeader: HeaderView;

    fn sub_header_id(&self, position: usize) -> SubHeaderId;

    fn create_sub_header(&self, parent: &ParentGeometry) -> Self::SubHeader;

    /// Never called for a position whose id is [`crate::NO_SUB_HEADER_ID`].
    fn bind_sub_header(&self, sub_header: &mut Self::SubHeader, position: usize);
}

/// Wraps a single-level adapter so it can drive [`crate::StickyHeaders`].
///
/// Every position reports [`NO_SUB_HEADER_ID`], so the sub-header level is never materialized.
/// Built by [`crate::StickyHeaderBuilder::build`].
#[derive(Clone, Debug)]
pub struct SingleLevel<A>(A);

impl<A> SingleLevel<A> {
    pub(crate) fn new(adapter: A) -> Self {
        Self(adapter)
    }

    pub fn get_ref(&self) -> &A {
        &self.0
    }

    pub fn get_mut(&mut self) -> &mut A {
        &mut self.0
    }

    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: HeaderAdapter> HeaderAdapter for SingleLevel<A> {
    type Header = A::Header;

    fn item_count(&self) -> usize {
        self.0.item_count()
    }

    fn header_id(&self, position: usize) -> HeaderId {
        self.0.header_id(position)
    }

    fn create_header(&self, parent: &ParentGeometry) -> Self::Header {
        self.0.create_header(parent)
    }

    fn bind_header(&self, header: &mut Self::Header, position: usize) {
        self.0.bind_header(header, position);
    }
}

impl<A: HeaderAdapter> DoubleHeaderAdapter for SingleLevel<A> {
    type SubHeader = A::Header;

    fn sub_header_id(&self, _position: usize) -> SubHeaderId {
        NO_SUB_HEADER_ID
    }

    fn create_sub_header(&self, parent: &ParentGeometry) -> Self::SubHeader {
        self.0.create_header(parent)
    }

    fn bind_sub_header(&self, _sub_header: &mut Self::SubHeader, _position: usize) {}
}
