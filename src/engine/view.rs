//! Render-ready snapshot of a carousel.
//!
//! A [`CarouselView`] is derived purely from the item list, the current
//! index and the page size. Renderers only read it; they never reach back
//! into the engine.

use super::autoplay::AutoplayState;
use super::calculations::{
    PageSize, indicator_count, is_indicator_active, item_width_percent, max_index,
    strip_offset_percent,
};
use crate::types::Item;
use std::ops::Range;

/// One indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Zero-based page number.
    pub page: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a> {
    pub items: &'a [Item],
    pub current_index: usize,
    pub page_size: PageSize,
    /// Translation applied to the whole strip, in percent.
    pub strip_offset_percent: f64,
    /// Width of every item, in percent.
    pub item_width_percent: f64,
    pub indicators: Vec<Indicator>,
    /// Items fully inside the viewport.
    pub visible: Range<usize>,
    pub autoplay: AutoplayState,
    /// False when there is only one page (or nothing at all) to show.
    pub can_navigate: bool,
}

impl<'a> CarouselView<'a> {
    /// Derive the view for `items` at `current_index`.
    ///
    /// `current_index` is clamped the same way the engine clamps it, so a
    /// stale index can never place the strip past the last full page.
    pub fn derive(
        items: &'a [Item],
        current_index: usize,
        page_size: PageSize,
        autoplay: AutoplayState,
    ) -> Self {
        let count = items.len();
        let current_index = current_index.min(max_index(count, page_size));
        let indicators = (0..indicator_count(count, page_size))
            .map(|page| Indicator {
                page,
                active: is_indicator_active(page, current_index, page_size),
            })
            .collect();
        let visible_end = current_index.saturating_add(page_size.get()).min(count);

        Self {
            items,
            current_index,
            page_size,
            strip_offset_percent: strip_offset_percent(current_index, page_size),
            item_width_percent: item_width_percent(page_size),
            indicators,
            visible: current_index.min(visible_end)..visible_end,
            autoplay,
            can_navigate: max_index(count, page_size) > 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based page of the first active indicator, if any.
    pub fn active_page(&self) -> Option<usize> {
        self.indicators.iter().find(|i| i.active).map(|i| i.page)
    }
}
