//! The carousel engine: rotation state, responsive page size and the
//! autoplay timer of one mounted instance.
//!
//! ## Lifecycle
//!
//! ```text
//! mount ──► (width unknown, timer armed)
//!   │ on_viewport_resize(w)      page size applied, index re-clamped
//!   │ on_pointer_enter / leave   Running ⇄ Paused (leave re-arms a full interval)
//!   │ on_timer_elapsed(dt)       next() once per completed interval
//!   ▼
//! on_teardown ──► Stopped (timer dropped, every later call is inert)
//! ```
//!
//! All mutation goes through `&mut self`, so each callback is an atomic
//! read-modify-write of the rotation state.

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, trace};

use super::autoplay::{AutoplayState, AutoplayTimer, DEFAULT_INTERVAL};
use super::calculations::{Breakpoints, PageSize, compute_page_size, max_index, page_start_index};
use super::host::{HostEvent, HostEvents};
use super::view::CarouselView;
use crate::config::CarouselConfig;
use crate::types::Item;

/// The mutable part of a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotationState {
    pub current_index: usize,
    pub page_size: PageSize,
    /// True while an autoplay timer is alive.
    pub autoplay_active: bool,
}

/// Settings fixed at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub breakpoints: Breakpoints,
    pub interval: Duration,
    pub autoplay: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            interval: DEFAULT_INTERVAL,
            autoplay: true,
        }
    }
}

impl From<&CarouselConfig> for EngineOptions {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            breakpoints: config.breakpoints.to_breakpoints(),
            interval: config.autoplay.interval(),
            autoplay: config.autoplay.enabled,
        }
    }
}

#[derive(Debug)]
pub struct CarouselEngine {
    items: Vec<Item>,
    options: EngineOptions,
    state: RotationState,
    viewport_width: Option<u32>,
    hovering: bool,
    timer: Option<AutoplayTimer>,
    torn_down: bool,
}

impl CarouselEngine {
    /// Mount a carousel over `items`.
    ///
    /// The index starts at 0 and the autoplay timer is armed immediately.
    /// The viewport width is unknown until the host reports it, so
    /// [`view`](Self::view) returns `None` until then; navigation before
    /// that uses the smallest page size.
    pub fn mount(items: Vec<Item>, options: EngineOptions) -> Self {
        let timer = if options.autoplay {
            AutoplayTimer::arm(options.interval)
        } else {
            None
        };
        debug!(
            items = items.len(),
            autoplay = timer.is_some(),
            interval_ms = options.interval.as_millis() as u64,
            "carousel mounted"
        );
        Self {
            items,
            options,
            state: RotationState {
                current_index: 0,
                page_size: PageSize::One,
                autoplay_active: timer.is_some(),
            },
            viewport_width: None,
            hovering: false,
            timer,
            torn_down: false,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn page_size(&self) -> PageSize {
        self.state.page_size
    }

    pub fn max_index(&self) -> usize {
        max_index(self.items.len(), self.state.page_size)
    }

    /// Last measured viewport width, `None` before the first measurement.
    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        if self.torn_down {
            AutoplayState::Stopped
        } else if self.timer.is_some() {
            AutoplayState::Running
        } else if !self.options.autoplay || self.options.interval.is_zero() {
            AutoplayState::Disabled
        } else {
            AutoplayState::Paused
        }
    }

    /// Time until the next automatic advance, `None` when no timer is alive.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.timer.as_ref().map(AutoplayTimer::remaining)
    }

    /// Apply a measured viewport width: recompute the page size and re-clamp
    /// the index to the new `max_index`. Returns the page size now in effect.
    pub fn apply_viewport_width(&mut self, width: u32) -> PageSize {
        if self.torn_down {
            return self.state.page_size;
        }
        let page_size = compute_page_size(width, self.options.breakpoints);
        if self.viewport_width.is_none() || page_size != self.state.page_size {
            debug!(width, page_size = page_size.get(), "page size applied");
        }
        self.viewport_width = Some(width);
        self.state.page_size = page_size;
        let max = self.max_index();
        if self.state.current_index > max {
            debug!(from = self.state.current_index, to = max, "index re-clamped");
            self.state.current_index = max;
        }
        page_size
    }

    /// Advance one position, wrapping to 0 after the last full page.
    pub fn next(&mut self) -> usize {
        if self.is_inert() {
            return self.state.current_index;
        }
        let max = self.max_index();
        if self.state.current_index >= max {
            if max > 0 {
                debug!(from = self.state.current_index, "wrapped to start");
            }
            self.state.current_index = 0;
        } else {
            self.state.current_index += 1;
        }
        self.state.current_index
    }

    /// Step back one position, wrapping from 0 to the last full page.
    pub fn previous(&mut self) -> usize {
        if self.is_inert() {
            return self.state.current_index;
        }
        let max = self.max_index();
        if self.state.current_index == 0 {
            if max > 0 {
                debug!(to = max, "wrapped to end");
            }
            self.state.current_index = max;
        } else {
            self.state.current_index = (self.state.current_index - 1).min(max);
        }
        self.state.current_index
    }

    /// Jump to the start of zero-based `page`, clamped to the last full page.
    pub fn jump_to_page(&mut self, page: usize) -> usize {
        if self.is_inert() {
            return self.state.current_index;
        }
        self.state.current_index = page_start_index(page, self.items.len(), self.state.page_size);
        self.state.current_index
    }

    /// Report whether the pointer is over the carousel.
    ///
    /// Entering cancels the timer; leaving arms a fresh one with a full
    /// interval. Repeated reports of the same value change nothing, so at
    /// most one timer is ever alive.
    pub fn set_hover(&mut self, is_hovering: bool) {
        if self.torn_down || self.hovering == is_hovering {
            return;
        }
        self.hovering = is_hovering;
        if is_hovering {
            if self.timer.take().is_some() {
                debug!("autoplay paused");
            }
        } else if self.options.autoplay {
            self.timer = AutoplayTimer::arm(self.options.interval);
            if self.timer.is_some() {
                debug!("autoplay resumed");
            }
        }
        self.state.autoplay_active = self.timer.is_some();
    }

    /// Feed host clock time to the autoplay timer. Calls [`next`](Self::next)
    /// once per completed interval and returns the number of advances.
    pub fn advance_time(&mut self, elapsed: Duration) -> u64 {
        if self.torn_down {
            return 0;
        }
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let fires = timer.advance(elapsed);
        // A full rotation returns to the same index, so only the remainder
        // of the fire count matters for the final position.
        let cycle = (self.max_index() as u64).saturating_add(1);
        for _ in 0..fires % cycle {
            self.next();
        }
        if fires > 0 {
            trace!(fires, index = self.state.current_index, "autoplay advanced");
        }
        fires
    }

    /// Tear the instance down: drop the timer and make every later call inert.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.timer = None;
        self.torn_down = true;
        self.state.autoplay_active = false;
        debug!(index = self.state.current_index, "carousel torn down");
    }

    /// Dispatch one host event. Returns the number of automatic advances it
    /// triggered (non-zero only for [`HostEvent::Elapsed`]).
    pub fn dispatch(&mut self, event: HostEvent) -> u64 {
        match event {
            HostEvent::Resize(width) => self.on_viewport_resize(width),
            HostEvent::PointerEnter => self.on_pointer_enter(),
            HostEvent::PointerLeave => self.on_pointer_leave(),
            HostEvent::Elapsed(dt) => return self.on_timer_elapsed(dt),
            HostEvent::Next => {
                self.next();
            }
            HostEvent::Previous => {
                self.previous();
            }
            HostEvent::JumpToPage(page) => {
                self.jump_to_page(page);
            }
            HostEvent::Teardown => self.on_teardown(),
        }
        0
    }

    /// Render-ready snapshot. `None` before the first viewport measurement
    /// and after teardown.
    pub fn view(&self) -> Option<CarouselView<'_>> {
        if self.torn_down || self.viewport_width.is_none() {
            return None;
        }
        Some(CarouselView::derive(
            &self.items,
            self.state.current_index,
            self.state.page_size,
            self.autoplay_state(),
        ))
    }

    fn is_inert(&self) -> bool {
        self.torn_down || self.items.is_empty()
    }
}

impl HostEvents for CarouselEngine {
    fn on_viewport_resize(&mut self, width: u32) {
        self.apply_viewport_width(width);
    }

    fn on_pointer_enter(&mut self) {
        self.set_hover(true);
    }

    fn on_pointer_leave(&mut self) {
        self.set_hover(false);
    }

    fn on_timer_elapsed(&mut self, elapsed: Duration) -> u64 {
        self.advance_time(elapsed)
    }

    fn on_teardown(&mut self) {
        self.teardown();
    }
}
