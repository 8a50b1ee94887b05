/// Stacking configuration for a [`crate::StickyHeaders`] instance.
///
/// Fixed at construction. Affects both reserved layout space and draw positions:
/// - `*_sticky`: the level pins to the top of the viewport (and gets pushed off by the next
///   section) instead of scrolling away with its first item.
/// - `render_*_inline`: the level is drawn over the top of its first item instead of in reserved
///   space above it, so it contributes nothing to [`crate::StickyHeaders::reserve_space`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyConfig {
    pub header_sticky: bool,
    pub sub_header_sticky: bool,
    pub render_header_inline: bool,
    pub render_sub_header_inline: bool,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            header_sticky: true,
            sub_header_sticky: true,
            render_header_inline: false,
            render_sub_header_inline: false,
        }
    }
}

impl StickyConfig {
    pub fn with_header_sticky(mut self, sticky: bool) -> Self {
        self.header_sticky = sticky;
        self
    }

    pub fn with_sub_header_sticky(mut self, sticky: bool) -> Self {
        self.sub_header_sticky = sticky;
        self
    }

    pub fn with_render_header_inline(mut self, inline: bool) -> Self {
        self.render_header_inline = inline;
        self
    }

    pub fn with_render_sub_header_inline(mut self, inline: bool) -> Self {
        self.render_sub_header_inline = inline;
        self
    }
}

/// How many sticky levels a decoration resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Levels {
    /// Headers only; the sub-header level is never queried.
    Single,
    /// Headers and sub-headers.
    Double,
}
