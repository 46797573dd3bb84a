//! Carousel engine — rotation state, responsive paging and autoplay.
//!
//! | Concern | Where |
//! |---|---|
//! | **Page size** | [`compute_page_size`] over [`Breakpoints`] |
//! | **Index math** | [`max_index`], [`page_start_index`] |
//! | **Layout** | [`strip_offset_percent`], [`item_width_percent`], [`CarouselView`] |
//! | **Autoplay** | [`AutoplayTimer`], [`AutoplayState`] |
//! | **Lifecycle** | [`HostEvents`] implemented by [`CarouselEngine`] |
//!
//! The module is split into:
//! - **Calculations**: pure functions shared by the engine and the renderers
//! - **Autoplay**: the owned, host-driven interval timer
//! - **View**: render-ready snapshot derived from state
//! - **Host**: the event interface a host environment calls into
//! - **Carousel**: the engine tying the above together

mod autoplay;
mod calculations;
mod carousel;
mod host;
mod view;

pub use autoplay::{AutoplayState, AutoplayTimer, DEFAULT_INTERVAL};
pub use calculations::{
    Breakpoints, PageSize, compute_page_size, indicator_count, is_indicator_active,
    item_width_percent, max_index, page_start_index, strip_offset_percent,
};
pub use carousel::{CarouselEngine, EngineOptions, RotationState};
pub use host::{HostEvent, HostEvents};
pub use view::{CarouselView, Indicator};
