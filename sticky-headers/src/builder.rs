use crate::{DoubleHeaderAdapter, HeaderAdapter, SingleStickyHeaders, StickyConfig, StickyHeaders};

/// Builds a [`StickyHeaders`] from an adapter.
///
/// `build` gives a header-only decoration for any [`HeaderAdapter`]; `build_double` gives a
/// header + sub-header decoration for a [`DoubleHeaderAdapter`].
///
/// `render_inline` applies to the innermost level: the header of a single-level decoration, the
/// sub-header of a double-level one. The per-level setters take precedence over it.
#[derive(Clone, Debug)]
pub struct StickyHeaderBuilder<A> {
    adapter: A,
    sticky: bool,
    sub_sticky: bool,
    inline: bool,
    header_inline: Option<bool>,
    sub_header_inline: Option<bool>,
}

impl<A> StickyHeaderBuilder<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            sticky: true,
            sub_sticky: true,
            inline: false,
            header_inline: None,
            sub_header_inline: None,
        }
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn sub_sticky(mut self, sub_sticky: bool) -> Self {
        self.sub_sticky = sub_sticky;
        self
    }

    pub fn render_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn render_header_inline(mut self, inline: bool) -> Self {
        self.header_inline = Some(inline);
        self
    }

    pub fn render_sub_header_inline(mut self, inline: bool) -> Self {
        self.sub_header_inline = Some(inline);
        self
    }

    fn config(&self, innermost_is_header: bool) -> StickyConfig {
        let (header_default, sub_header_default) = if innermost_is_header {
            (self.inline, false)
        } else {
            (false, self.inline)
        };
        StickyConfig {
            header_sticky: self.sticky,
            sub_header_sticky: self.sub_sticky,
            render_header_inline: self.header_inline.unwrap_or(header_default),
            render_sub_header_inline: self.sub_header_inline.unwrap_or(sub_header_default),
        }
    }
}

impl<A: HeaderAdapter> StickyHeaderBuilder<A> {
    pub fn build(self) -> SingleStickyHeaders<A> {
        let config = self.config(true);
        SingleStickyHeaders::single(self.adapter, config)
    }
}

impl<A: DoubleHeaderAdapter> StickyHeaderBuilder<A> {
    pub fn build_double(self) -> StickyHeaders<A> {
        let config = self.config(false);
        StickyHeaders::double(self.adapter, config)
    }
}
