//! Shared test utilities for the logo-carousel test suite.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let mut engine = mounted(4, 1200);
//! engine.next();
//! assert_index_invariant(&engine);
//! ```

use crate::engine::{CarouselEngine, EngineOptions, max_index};
use crate::types::Item;

/// `count` items named `Item 1`, `Item 2`, ... with ids starting at 1.
pub fn sample_items(count: usize) -> Vec<Item> {
    (1..=count)
        .map(|n| Item {
            id: n as u32,
            display_name: format!("Item {n}"),
            image_ref: format!("/logos/item-{n}.png"),
            caption: format!("Caption {n}"),
        })
        .collect()
}

/// Mount `count` sample items with default options and report `width` as the
/// first viewport measurement.
pub fn mounted(count: usize, width: u32) -> CarouselEngine {
    let mut engine = CarouselEngine::mount(sample_items(count), EngineOptions::default());
    engine.apply_viewport_width(width);
    engine
}

/// Assert `0 <= current_index <= max(0, item_count - page_size)`.
pub fn assert_index_invariant(engine: &CarouselEngine) {
    let max = max_index(engine.item_count(), engine.page_size());
    assert!(
        engine.current_index() <= max,
        "index {} exceeds max {} ({} items, page size {})",
        engine.current_index(),
        max,
        engine.item_count(),
        engine.page_size()
    );
}
