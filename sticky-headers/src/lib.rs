//! Headless sticky section headers for virtualized lists.
//!
//! Given the items a virtualization engine currently has materialized (a viewport window) and an
//! adapter mapping item positions to header ids, this crate computes:
//! - which header (and optional sub-header) belongs on screen for each visible section
//! - how much space each item must reserve above itself so headers never cover it
//! - where each header goes this frame, including the push-off transition where the next
//!   section's header shoves the pinned one out of the viewport
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`HeaderAdapter`] (or [`DoubleHeaderAdapter`]) that creates, binds and measures header views
//! - the current window geometry through a [`ViewportProbe`] (or a [`ViewportWindow`])
//! - a [`HeaderCanvas`] that draws a view at a placement
//!
//! ```
//! use sticky_headers::{
//!     ChildGeom, HeaderAdapter, HeaderId, HeaderView, MeasureSpec, ParentGeometry, Size,
//!     StickyHeaderBuilder, ViewportWindow,
//! };
//!
//! struct Row;
//!
//! impl HeaderView for Row {
//!     fn measure(&mut self, spec: MeasureSpec) -> Size {
//!         Size { width: spec.width, height: 2 }
//!     }
//! }
//!
//! struct Sections;
//!
//! impl HeaderAdapter for Sections {
//!     type Header = Row;
//!
//!     fn item_count(&self) -> usize {
//!         100
//!     }
//!
//!     fn header_id(&self, position: usize) -> HeaderId {
//!         (position / 10) as HeaderId
//!     }
//!
//!     fn create_header(&self, _parent: &ParentGeometry) -> Row {
//!         Row
//!     }
//!
//!     fn bind_header(&self, _header: &mut Row, _position: usize) {}
//! }
//!
//! let mut headers = StickyHeaderBuilder::new(Sections).build();
//! let parent = ParentGeometry::new(80, 24);
//! let window = ViewportWindow::new(parent)
//!     .with_child(ChildGeom::new(3, 0, 1))
//!     .with_child(ChildGeom::new(4, 1, 1));
//!
//! let placements = headers.frame(&window).unwrap();
//! assert_eq!(placements.len(), 1);
//! assert_eq!(placements[0].top(), 0);
//! assert_eq!(headers.reserve_space(Some(10), &parent).unwrap().top, 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod builder;
mod cache;
mod canvas;
mod decoration;
mod error;
mod key;
mod options;
mod probe;
mod types;


pub use adapter::{DoubleHeaderAdapter, HeaderAdapter, HeaderView, SingleLevel};
pub use builder::StickyHeaderBuilder;
pub use cache::{HeaderCache, HeaderEntry, HeaderHit};
pub use canvas::HeaderCanvas;
pub use decoration::{SingleStickyHeaders, StickyHeaders};
pub use error::Error;
pub use options::{Levels, StickyConfig};
pub use probe::{
    ChildGeom, ParentGeometry, ViewportProbe, ViewportWindow, first_valid_child,
    is_first_valid_child,
};
pub use types::{
    HeaderId, HeaderPlacement, ItemOffsets, Layer, Level, MeasureSpec, NO_HEADER_ID,
    NO_SUB_HEADER_ID, Rect, Size, SubHeaderId,
};
