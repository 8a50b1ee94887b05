/// Identity of a header section. Compared for equality only.
pub type HeaderId = i64;

/// Identity of a sub-header section. Lives in its own key space, separate from [`HeaderId`].
pub type SubHeaderId = i64;

/// Returned by [`crate::HeaderAdapter::header_id`] for items that have no header at all.
pub const NO_HEADER_ID: HeaderId = -1;

/// Returned by [`crate::DoubleHeaderAdapter::sub_header_id`] for items that have no sub-header.
pub const NO_SUB_HEADER_ID: SubHeaderId = -1;

/// Which sticky level a header belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    Header,
    SubHeader,
}

/// Paint layer of a placement relative to the list items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Drawn before the items, in document order (non-sticky levels).
    Under,
    /// Drawn after the items, above everything (sticky levels).
    Over,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// An axis-aligned rectangle in viewport pixels. `right`/`bottom` are exclusive for layout but
/// hit testing treats all four edges as inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn from_origin_size(left: i32, top: i32, size: Size) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(size.width),
            bottom: top.saturating_add(size.height),
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32 && x <= self.right as f32 && y >= self.top as f32 && y <= self.bottom as f32
    }
}

/// Constraints a header view is measured against.
///
/// The width is exact. The height is unconstrained; `available_height` is only a hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSpec {
    pub width: i32,
    pub available_height: i32,
}

/// Space an item must reserve above itself in the list layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOffsets {
    pub top: i32,
}

/// Where a header or sub-header goes in the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderPlacement {
    pub level: Level,
    pub layer: Layer,
    pub id: HeaderId,
    /// Adapter position of the item that drove this placement.
    pub position: usize,
    /// Layout index of that item inside the viewport window.
    pub layout_index: usize,
    /// Viewport-relative bounds (`left` from the item, `top` from the stacking math).
    pub bounds: Rect,
}

impl HeaderPlacement {
    pub fn left(&self) -> i32 {
        self.bounds.left
    }

    pub fn top(&self) -> i32 {
        self.bounds.top
    }
}
