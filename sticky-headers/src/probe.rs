use alloc::vec::Vec;

use crate::MeasureSpec;

/// Geometry of the list container itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentGeometry {
    pub width: i32,
    pub height: i32,
    pub padding_left: i32,
    pub padding_top: i32,
    pub padding_right: i32,
    pub padding_bottom: i32,
}

impl ParentGeometry {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        self.padding_left = left;
        self.padding_top = top;
        self.padding_right = right;
        self.padding_bottom = bottom;
        self
    }

    /// Exact width minus horizontal padding; height left open.
    pub fn measure_spec(&self) -> MeasureSpec {
        MeasureSpec {
            width: (self.width - self.padding_left - self.padding_right).max(0),
            available_height: (self.height - self.padding_top - self.padding_bottom).max(0),
        }
    }
}

/// One materialized list item, as laid out for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildGeom {
    /// `None` while the item is being removed (or otherwise has no adapter position).
    pub adapter_position: Option<usize>,
    pub left: i32,
    pub right: i32,
    /// Layout top, relative to the viewport.
    pub top: i32,
    pub height: i32,
    /// In-flight vertical translation from item animations.
    pub translation_y: i32,
}

impl ChildGeom {
    pub fn new(adapter_position: usize, top: i32, height: i32) -> Self {
        Self {
            adapter_position: Some(adapter_position),
            top,
            height,
            ..Self::default()
        }
    }

    /// An item that still occupies a layout slot but has no adapter position.
    pub fn detached(top: i32, height: i32) -> Self {
        Self {
            adapter_position: None,
            top,
            height,
            ..Self::default()
        }
    }

    pub fn with_horizontal(mut self, left: i32, right: i32) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    pub fn with_translation_y(mut self, translation_y: i32) -> Self {
        self.translation_y = translation_y;
        self
    }

    pub fn animated_top(&self) -> i32 {
        self.top.saturating_add(self.translation_y)
    }

    /// At least one pixel of the item is below the viewport's top edge.
    pub fn is_visible(&self) -> bool {
        self.animated_top() > -self.height
    }

    pub fn is_valid(&self) -> bool {
        self.adapter_position.is_some()
    }
}

/// Read access to the items a virtualization engine currently has materialized.
///
/// Children are in on-screen order (top to bottom) and valid adapter positions increase with the
/// layout index.
pub trait ViewportProbe {
    fn parent(&self) -> ParentGeometry;

    fn child_count(&self) -> usize;

    /// `layout_index` is always `< child_count()`.
    fn child_at(&self, layout_index: usize) -> ChildGeom;

    fn adapter_position_of(&self, layout_index: usize) -> Option<usize> {
        self.child_at(layout_index).adapter_position
    }
}

/// Returns `true` when no valid, visible child precedes `layout_index`.
///
/// Only that child is anchored to the top of the viewport, so only it computes push-off.
pub fn is_first_valid_child(probe: &(impl ViewportProbe + ?Sized), layout_index: usize) -> bool {
    (0..layout_index).rev().all(|i| {
        let other = probe.child_at(i);
        !(other.is_valid() && other.is_visible())
    })
}

/// Layout index of the first valid, visible child.
pub fn first_valid_child(probe: &(impl ViewportProbe + ?Sized)) -> Option<usize> {
    (0..probe.child_count()).find(|&i| {
        let child = probe.child_at(i);
        child.is_valid() && child.is_visible()
    })
}

/// An owned viewport window: the simplest [`ViewportProbe`].
///
/// Hosts that do not expose their children through a trait can copy geometry into one of these
/// each frame. Pushing enforces the window contract:
/// - Valid adapter positions must be strictly increasing (debug-asserted, ignored otherwise).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportWindow {
    parent: ParentGeometry,
    children: Vec<ChildGeom>,
    #[cfg_attr(feature = "serde", serde(skip))]
    last_position: Option<usize>,
}

impl ViewportWindow {
    pub fn new(parent: ParentGeometry) -> Self {
        Self {
            parent,
            children: Vec::new(),
            last_position: None,
        }
    }

    /// Builds a window from content-space item extents (e.g. a virtualizer's visible items).
    ///
    /// `start` is the item's offset from the top of the content, `size` its height; tops are
    /// converted to viewport coordinates by subtracting `scroll_offset`. Items span the parent's
    /// padded width.
    pub fn from_virtual_items(
        parent: ParentGeometry,
        scroll_offset: u64,
        items: impl IntoIterator<Item = (usize, u64, u32)>,
    ) -> Self {
        let mut window = Self::new(parent);
        let left = parent.padding_left;
        let right = parent.width - parent.padding_right;
        for (position, start, size) in items {
            let top = start as i64 - scroll_offset as i64 + parent.padding_top as i64;
            let top = top.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
            let height = size.min(i32::MAX as u32) as i32;
            window.push(ChildGeom::new(position, top, height).with_horizontal(left, right));
        }
        window
    }

    pub fn parent_geometry(&self) -> ParentGeometry {
        self.parent
    }

    pub fn set_parent(&mut self, parent: ParentGeometry) {
        self.parent = parent;
    }

    pub fn clear(&mut self) {
        self.children.clear();
        self.last_position = None;
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[ChildGeom] {
        &self.children
    }

    pub fn push(&mut self, child: ChildGeom) {
        if let Some(position) = child.adapter_position {
            if let Some(prev) = self.last_position {
                if position <= prev {
                    swarn!(
                        prev,
                        next = position,
                        "ViewportWindow: adapter positions must increase with layout order"
                    );
                    debug_assert!(
                        position > prev,
                        "ViewportWindow: adapter positions must increase with layout order (prev={prev}, next={position})"
                    );
                    return;
                }
            }
            self.last_position = Some(position);
        }
        self.children.push(child);
    }

    pub fn with_child(mut self, child: ChildGeom) -> Self {
        self.push(child);
        self
    }
}

impl ViewportProbe for ViewportWindow {
    fn parent(&self) -> ParentGeometry {
        self.parent
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, layout_index: usize) -> ChildGeom {
        self.children[layout_index]
    }
}

impl<P: ViewportProbe + ?Sized> ViewportProbe for &P {
    fn parent(&self) -> ParentGeometry {
        (**self).parent()
    }

    fn child_count(&self) -> usize {
        (**self).child_count()
    }

    fn child_at(&self, layout_index: usize) -> ChildGeom {
        (**self).child_at(layout_index)
    }

    fn adapter_position_of(&self, layout_index: usize) -> Option<usize> {
        (**self).adapter_position_of(layout_index)
    }
}
