use crate::key::IdMap;
use crate::{HeaderId, HeaderView, ParentGeometry, Rect, Size};

/// Where an entry was last placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Drawn {
    pub(crate) frame: u64,
    pub(crate) order: usize,
    pub(crate) bounds: Rect,
}

/// A realized, measured header view.
#[derive(Clone, Debug)]
pub struct HeaderEntry<V> {
    id: HeaderId,
    view: V,
    size: Size,
    drawn: Option<Drawn>,
}

impl<V> HeaderEntry<V> {
    pub fn id(&self) -> HeaderId {
        self.id
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Bounds of the most recent placement, if the entry was ever placed.
    pub fn last_bounds(&self) -> Option<Rect> {
        self.drawn.map(|d| d.bounds)
    }
}

/// Result of a hit test against drawn headers.
#[derive(Debug)]
pub struct HeaderHit<'a, V> {
    pub id: HeaderId,
    pub view: &'a V,
    pub bounds: Rect,
}

/// Keyed store of realized header views for one level.
///
/// Entries are created on first use and live until [`HeaderCache::clear`]; there is no eviction,
/// so memory grows with the number of distinct ids seen. Not synchronized: clearing while a
/// paint pass is running on another thread is not supported.
#[derive(Clone, Debug)]
pub struct HeaderCache<V> {
    entries: IdMap<HeaderEntry<V>>,
}

impl<V> Default for HeaderCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HeaderCache<V> {
    pub fn new() -> Self {
        Self {
            entries: IdMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: HeaderId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: HeaderId) -> Option<&HeaderEntry<V>> {
        self.entries.get(&id)
    }

    pub fn clear(&mut self) {
        sdebug!(entries = self.entries.len(), "HeaderCache::clear");
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry<V>> {
        self.entries.values()
    }

    /// Returns the entry for `id`, creating, binding and measuring it on a miss.
    ///
    /// `create` and `bind` run only on a miss; a hit returns the cached entry unconditionally.
    pub fn get_or_create(
        &mut self,
        id: HeaderId,
        parent: &ParentGeometry,
        create: impl FnOnce(&ParentGeometry) -> V,
        bind: impl FnOnce(&mut V),
    ) -> &HeaderEntry<V>
    where
        V: HeaderView,
    {
        self.entries.entry(id).or_insert_with(|| {
            let mut view = create(parent);
            bind(&mut view);
            let size = view.measure(parent.measure_spec());
            sdebug!(id, width = size.width, height = size.height, "HeaderCache: created");
            HeaderEntry {
                id,
                view,
                size,
                drawn: None,
            }
        })
    }

    pub(crate) fn mark_drawn(&mut self, id: HeaderId, drawn: Drawn) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.drawn = Some(drawn);
        }
    }

    /// Finds the top-most entry placed during `frame` whose bounds contain `(x, y)`.
    pub(crate) fn hit_test(&self, frame: u64, x: f32, y: f32) -> Option<HeaderHit<'_, V>> {
        self.entries
            .values()
            .filter_map(|entry| {
                let drawn = entry.drawn?;
                (drawn.frame == frame && drawn.bounds.contains(x, y)).then_some((drawn, entry))
            })
            .max_by_key(|(drawn, _)| drawn.order)
            .map(|(drawn, entry)| HeaderHit {
                id: entry.id,
                view: &entry.view,
                bounds: drawn.bounds,
            })
    }
}
