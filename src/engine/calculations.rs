//! Pure calculation functions for carousel layout.
//!
//! Nothing here touches engine state: every function maps a page size, an
//! index and an item count to a number. The engine and both renderers share
//! these so they cannot disagree about where the strip sits.

use serde::Serialize;
use std::fmt;

/// Number of items visible at once. Only three tiers exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "usize")]
pub enum PageSize {
    One,
    Two,
    Three,
}

impl PageSize {
    pub const fn get(self) -> usize {
        match self {
            PageSize::One => 1,
            PageSize::Two => 2,
            PageSize::Three => 3,
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Viewport width thresholds in CSS pixels.
///
/// Widths below `medium` show one item, widths from `medium` show two, and
/// widths from `large` show three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub medium: u32,
    pub large: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 768,
            large: 1024,
        }
    }
}

/// Map a viewport width to a page size.
///
/// # Examples
/// ```
/// # use logo_carousel::engine::{compute_page_size, Breakpoints, PageSize};
/// let tiers = Breakpoints::default();
/// assert_eq!(compute_page_size(1200, tiers), PageSize::Three);
/// assert_eq!(compute_page_size(1023, tiers), PageSize::Two);
/// assert_eq!(compute_page_size(767, tiers), PageSize::One);
/// ```
pub fn compute_page_size(viewport_width: u32, breakpoints: Breakpoints) -> PageSize {
    if viewport_width >= breakpoints.large {
        PageSize::Three
    } else if viewport_width >= breakpoints.medium {
        PageSize::Two
    } else {
        PageSize::One
    }
}

/// Largest valid start index: the last position that still shows a full page.
///
/// Clamped to 0 when there are fewer items than a page.
pub fn max_index(item_count: usize, page_size: PageSize) -> usize {
    item_count.saturating_sub(page_size.get())
}

/// Width of a single item as a percentage of the viewport.
pub fn item_width_percent(page_size: PageSize) -> f64 {
    100.0 / page_size.get() as f64
}

/// Horizontal translation of the whole strip, in percent.
///
/// Zero (never negative zero) at index 0.
pub fn strip_offset_percent(current_index: usize, page_size: PageSize) -> f64 {
    if current_index == 0 {
        return 0.0;
    }
    -(current_index as f64 * item_width_percent(page_size))
}

/// Number of indicator dots: `ceil(item_count / page_size)`.
pub fn indicator_count(item_count: usize, page_size: PageSize) -> usize {
    item_count.div_ceil(page_size.get())
}

/// Whether dot `page` covers `current_index`.
pub fn is_indicator_active(page: usize, current_index: usize, page_size: PageSize) -> bool {
    let start = page.saturating_mul(page_size.get());
    let end = start.saturating_add(page_size.get());
    start <= current_index && current_index < end
}

/// Start index for a zero-based page, clamped into `[0, max_index]`.
pub fn page_start_index(page: usize, item_count: usize, page_size: PageSize) -> usize {
    page.saturating_mul(page_size.get())
        .min(max_index(item_count, page_size))
}
