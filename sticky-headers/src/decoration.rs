use alloc::vec::Vec;

use crate::cache::Drawn;
use crate::probe::is_first_valid_child;
use crate::{
    ChildGeom, DoubleHeaderAdapter, Error, HeaderAdapter, HeaderCache, HeaderCanvas, HeaderEntry,
    HeaderHit, HeaderId, HeaderPlacement, ItemOffsets, Layer, Level, Levels, NO_HEADER_ID,
    NO_SUB_HEADER_ID, ParentGeometry, Rect, SingleLevel, StickyConfig, SubHeaderId, ViewportProbe,
};

/// A single-level decoration, as produced by [`crate::StickyHeaderBuilder::build`].
pub type SingleStickyHeaders<A> = StickyHeaders<SingleLevel<A>>;

/// Resolves sticky headers (and optionally sub-headers) over a viewport window.
///
/// This type is intentionally UI-agnostic:
/// - It holds the adapter and one [`HeaderCache`] per level, nothing else that outlives a frame.
/// - The host feeds it a [`ViewportProbe`] each frame and gets back [`HeaderPlacement`]s, or lets
///   it drive a [`HeaderCanvas`] directly.
/// - Layout hosts call [`StickyHeaders::reserve_space`] per item so items never render underneath
///   a header.
///
/// All work is bounded by the number of materialized children, never by the item count. Calls are
/// expected on a single (UI) thread; nothing is synchronized.
pub struct StickyHeaders<A: DoubleHeaderAdapter> {
    adapter: A,
    config: StickyConfig,
    levels: Levels,
    headers: HeaderCache<A::Header>,
    sub_headers: HeaderCache<A::SubHeader>,
    placements: Vec<HeaderPlacement>,
    frame: u64,
}

impl<A: HeaderAdapter> StickyHeaders<SingleLevel<A>> {
    /// Creates a header-only decoration. Sub-header settings in `config` are ignored.
    pub fn single(adapter: A, config: StickyConfig) -> Self {
        Self::with_levels(SingleLevel::new(adapter), config, Levels::Single)
    }
}

impl<A: DoubleHeaderAdapter> StickyHeaders<A> {
    /// Creates a header + sub-header decoration.
    pub fn double(adapter: A, config: StickyConfig) -> Self {
        Self::with_levels(adapter, config, Levels::Double)
    }

    fn with_levels(adapter: A, config: StickyConfig, levels: Levels) -> Self {
        sdebug!(
            ?levels,
            header_sticky = config.header_sticky,
            sub_header_sticky = config.sub_header_sticky,
            render_header_inline = config.render_header_inline,
            render_sub_header_inline = config.render_sub_header_inline,
            "StickyHeaders::new"
        );
        Self {
            adapter,
            config,
            levels,
            headers: HeaderCache::new(),
            sub_headers: HeaderCache::new(),
            placements: Vec::new(),
            frame: 0,
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter. If the change alters header content, clear the caches.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn config(&self) -> StickyConfig {
        self.config
    }

    pub fn levels(&self) -> Levels {
        self.levels
    }

    pub fn header_cache(&self) -> &HeaderCache<A::Header> {
        &self.headers
    }

    pub fn sub_header_cache(&self) -> &HeaderCache<A::SubHeader> {
        &self.sub_headers
    }

    /// Placements computed by the most recent frame.
    pub fn placements(&self) -> &[HeaderPlacement] {
        &self.placements
    }

    /// Headers are recreated and rebound the next time they are needed.
    pub fn clear_header_cache(&mut self) {
        self.headers.clear();
    }

    /// Sub-headers are recreated and rebound the next time they are needed.
    pub fn clear_sub_header_cache(&mut self) {
        self.sub_headers.clear();
    }

    pub fn clear_all_caches(&mut self) {
        self.clear_sub_header_cache();
        self.clear_header_cache();
    }

    /// Whether `position` starts a header section (and has a header at all).
    pub fn has_header(&self, position: usize) -> Result<bool, Error> {
        self.check(position)?;
        Ok(self.starts_header(position))
    }

    /// Whether `position` starts a sub-header section. Always `false` for single-level decorations.
    pub fn has_sub_header(&self, position: usize) -> Result<bool, Error> {
        self.check(position)?;
        Ok(self.starts_sub_header(position))
    }

    /// Space the item at `position` must reserve above itself in the list layout.
    ///
    /// `None` stands for an item without an adapter position and reserves nothing.
    pub fn reserve_space(
        &mut self,
        position: Option<usize>,
        parent: &ParentGeometry,
    ) -> Result<ItemOffsets, Error> {
        let Some(position) = position else {
            return Ok(ItemOffsets::default());
        };
        self.check(position)?;
        Ok(ItemOffsets {
            top: self.reserve(position, parent),
        })
    }

    /// Resolves header placements for the window `probe` currently exposes.
    pub fn frame<P: ViewportProbe + ?Sized>(
        &mut self,
        probe: &P,
    ) -> Result<&[HeaderPlacement], Error> {
        self.resolve(probe)?;
        Ok(&self.placements)
    }

    /// Resolves the frame, then draws the [`Layer::Under`] placements followed by the
    /// [`Layer::Over`] ones.
    pub fn paint<P, C>(&mut self, probe: &P, canvas: &mut C) -> Result<(), Error>
    where
        P: ViewportProbe + ?Sized,
        C: HeaderCanvas<A::Header, A::SubHeader> + ?Sized,
    {
        self.resolve(probe)?;
        self.draw(canvas, Layer::Under);
        self.draw(canvas, Layer::Over);
        Ok(())
    }

    /// Resolves the frame and draws one layer. Hosts that render items themselves call this with
    /// [`Layer::Under`] before the items and [`Layer::Over`] after them.
    pub fn paint_layer<P, C>(&mut self, probe: &P, canvas: &mut C, layer: Layer) -> Result<(), Error>
    where
        P: ViewportProbe + ?Sized,
        C: HeaderCanvas<A::Header, A::SubHeader> + ?Sized,
    {
        self.resolve(probe)?;
        self.draw(canvas, layer);
        Ok(())
    }

    /// The top-most header placed in the most recent frame under `(x, y)`.
    pub fn find_header_at(&self, x: f32, y: f32) -> Option<HeaderHit<'_, A::Header>> {
        self.headers.hit_test(self.frame, x, y)
    }

    /// The top-most sub-header placed in the most recent frame under `(x, y)`.
    pub fn find_sub_header_at(&self, x: f32, y: f32) -> Option<HeaderHit<'_, A::SubHeader>> {
        self.sub_headers.hit_test(self.frame, x, y)
    }

    fn check(&self, position: usize) -> Result<(), Error> {
        let count = self.adapter.item_count();
        if position < count {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { position, count })
        }
    }

    fn header_id(&self, position: usize) -> HeaderId {
        self.adapter.header_id(position)
    }

    fn sub_header_id(&self, position: usize) -> SubHeaderId {
        match self.levels {
            Levels::Single => NO_SUB_HEADER_ID,
            Levels::Double => self.adapter.sub_header_id(position),
        }
    }

    fn starts_header(&self, position: usize) -> bool {
        let id = self.header_id(position);
        id != NO_HEADER_ID && (position == 0 || self.header_id(position - 1) != id)
    }

    fn starts_sub_header(&self, position: usize) -> bool {
        let id = self.sub_header_id(position);
        id != NO_SUB_HEADER_ID && (position == 0 || self.sub_header_id(position - 1) != id)
    }

    fn header_height(&mut self, position: usize, parent: &ParentGeometry) -> i32 {
        let id = self.header_id(position);
        if id == NO_HEADER_ID {
            return 0;
        }
        let adapter = &self.adapter;
        self.headers
            .get_or_create(
                id,
                parent,
                |parent| adapter.create_header(parent),
                |view| adapter.bind_header(view, position),
            )
            .height()
    }

    fn sub_header_height(&mut self, position: usize, parent: &ParentGeometry) -> i32 {
        let id = self.sub_header_id(position);
        if id == NO_SUB_HEADER_ID {
            return 0;
        }
        let adapter = &self.adapter;
        self.sub_headers
            .get_or_create(
                id,
                parent,
                |parent| adapter.create_sub_header(parent),
                |view| adapter.bind_sub_header(view, position),
            )
            .height()
    }

    // Sub-header space reserved above `position`; zero unless it starts a sub-header section.
    fn sub_header_reserve(&mut self, position: usize, parent: &ParentGeometry) -> i32 {
        if self.config.render_sub_header_inline || !self.starts_sub_header(position) {
            0
        } else {
            self.sub_header_height(position, parent)
        }
    }

    fn reserve(&mut self, position: usize, parent: &ParentGeometry) -> i32 {
        let mut top = 0;
        if !self.config.render_header_inline && self.starts_header(position) {
            top += self.header_height(position, parent);
        }
        top + self.sub_header_reserve(position, parent)
    }

    fn resolve<P: ViewportProbe + ?Sized>(&mut self, probe: &P) -> Result<(), Error> {
        self.frame = self.frame.wrapping_add(1);
        self.placements.clear();

        let count = probe.child_count();
        for layout_index in 0..count {
            if let Some(position) = probe.adapter_position_of(layout_index) {
                self.check(position)?;
            }
        }

        let parent = probe.parent();
        let mut previous_header = NO_HEADER_ID;
        let mut previous_sub_header = NO_SUB_HEADER_ID;

        for layout_index in 0..count {
            let child = probe.child_at(layout_index);
            let Some(position) = child.adapter_position else {
                continue;
            };
            if !child.is_visible() {
                continue;
            }

            let header_id = self.header_id(position);
            let sub_header_id = self.sub_header_id(position);
            let anchored = is_first_valid_child(probe, layout_index);

            if sub_header_id != NO_SUB_HEADER_ID
                && sub_header_id != previous_sub_header
                && (self.config.sub_header_sticky || self.starts_sub_header(position))
            {
                let top =
                    self.sub_header_top(probe, &parent, &child, position, layout_index, anchored);
                self.place(Level::SubHeader, sub_header_id, position, layout_index, child.left, top);
            }

            if header_id != NO_HEADER_ID
                && header_id != previous_header
                && (self.config.header_sticky || self.starts_header(position))
            {
                let top = self.header_top(probe, &parent, &child, position, layout_index, anchored);
                self.place(Level::Header, header_id, position, layout_index, child.left, top);
            }

            previous_header = header_id;
            previous_sub_header = sub_header_id;
        }

        strace!(
            frame = self.frame,
            children = count,
            placements = self.placements.len(),
            "StickyHeaders::resolve"
        );
        Ok(())
    }

    fn header_top<P: ViewportProbe + ?Sized>(
        &mut self,
        probe: &P,
        parent: &ParentGeometry,
        child: &ChildGeom,
        position: usize,
        layout_index: usize,
        anchored: bool,
    ) -> i32 {
        let height = self.header_height(position, parent);
        let layout_height = if self.config.render_header_inline {
            0
        } else {
            height
        };
        let top = child.animated_top() - layout_height - self.sub_header_reserve(position, parent);
        if !self.config.header_sticky || !anchored {
            return top;
        }

        // The next section's stack pushes this header up once it would overlap.
        let id = self.header_id(position);
        for next_index in layout_index + 1..probe.child_count() {
            let next = probe.child_at(next_index);
            let Some(next_position) = next.adapter_position else {
                continue;
            };
            if self.header_id(next_position) == id {
                continue;
            }
            let offset = next.animated_top() - self.reserve(next_position, parent) - height;
            if offset < 0 {
                return offset;
            }
        }

        top.max(0)
    }

    fn sub_header_top<P: ViewportProbe + ?Sized>(
        &mut self,
        probe: &P,
        parent: &ParentGeometry,
        child: &ChildGeom,
        position: usize,
        layout_index: usize,
        anchored: bool,
    ) -> i32 {
        let height = self.sub_header_height(position, parent);
        let layout_height = if self.config.render_sub_header_inline {
            0
        } else {
            height
        };
        let top = child.animated_top() - layout_height;
        if !self.config.sub_header_sticky {
            return top;
        }

        // A pinned header owns the space above the sub-header.
        let floor = if self.config.header_sticky {
            self.header_height(position, parent)
        } else {
            0
        };

        if anchored {
            let id = self.sub_header_id(position);
            for next_index in layout_index + 1..probe.child_count() {
                let next = probe.child_at(next_index);
                let Some(next_position) = next.adapter_position else {
                    continue;
                };
                if self.sub_header_id(next_position) == id {
                    continue;
                }
                let offset = next.animated_top() - self.reserve(next_position, parent) - height;
                if offset < floor {
                    return offset;
                }
            }
        } else if self.starts_header(position) {
            // No header-height floor: this row's own header is scrolling in right above it, and
            // clamping would split the sub-header from that header.
            return top;
        }

        top.max(floor)
    }

    fn place(
        &mut self,
        level: Level,
        id: HeaderId,
        position: usize,
        layout_index: usize,
        left: i32,
        top: i32,
    ) {
        let (size, sticky) = match level {
            Level::Header => (
                self.headers.get(id).map(HeaderEntry::size),
                self.config.header_sticky,
            ),
            Level::SubHeader => (
                self.sub_headers.get(id).map(HeaderEntry::size),
                self.config.sub_header_sticky,
            ),
        };
        let Some(size) = size else {
            return;
        };

        let bounds = Rect::from_origin_size(left, top, size);
        let drawn = Drawn {
            frame: self.frame,
            order: self.placements.len(),
            bounds,
        };
        match level {
            Level::Header => self.headers.mark_drawn(id, drawn),
            Level::SubHeader => self.sub_headers.mark_drawn(id, drawn),
        }

        self.placements.push(HeaderPlacement {
            level,
            layer: if sticky { Layer::Over } else { Layer::Under },
            id,
            position,
            layout_index,
            bounds,
        });
    }

    fn draw<C>(&self, canvas: &mut C, layer: Layer)
    where
        C: HeaderCanvas<A::Header, A::SubHeader> + ?Sized,
    {
        for placement in self.placements.iter().filter(|p| p.layer == layer) {
            match placement.level {
                Level::Header => {
                    if let Some(entry) = self.headers.get(placement.id) {
                        canvas.draw_header(entry.view(), placement);
                    }
                }
                Level::SubHeader => {
                    if let Some(entry) = self.sub_headers.get(placement.id) {
                        canvas.draw_sub_header(entry.view(), placement);
                    }
                }
            }
        }
    }
}

impl<A: DoubleHeaderAdapter> core::fmt::Debug for StickyHeaders<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyHeaders")
            .field("config", &self.config)
            .field("levels", &self.levels)
            .field("cached_headers", &self.headers.len())
            .field("cached_sub_headers", &self.sub_headers.len())
            .field("frame", &self.frame)
            .field("placements", &self.placements)
            .finish_non_exhaustive()
    }
}
