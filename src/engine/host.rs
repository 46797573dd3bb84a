//! The interface a host environment drives a carousel through.
//!
//! Whatever embeds the carousel (a browser binding, a TUI loop, a test, the
//! `replay` command) reports resize, pointer, clock and teardown callbacks
//! here, one at a time. Each callback runs to completion before the next is
//! delivered.

use std::fmt;
use std::time::Duration;

/// Lifecycle callbacks every carousel instance accepts.
pub trait HostEvents {
    /// The viewport was measured or resized. The first call after mount is
    /// the initial measurement.
    fn on_viewport_resize(&mut self, width: u32);

    /// The pointer entered the carousel's bounding region.
    fn on_pointer_enter(&mut self);

    /// The pointer left the carousel's bounding region.
    fn on_pointer_leave(&mut self);

    /// Host clock advanced by `elapsed`. Returns how many automatic advances
    /// fired.
    fn on_timer_elapsed(&mut self, elapsed: Duration) -> u64;

    /// The carousel is being removed. Nothing fires afterwards.
    fn on_teardown(&mut self);
}

/// A single host callback or user control action, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Resize(u32),
    PointerEnter,
    PointerLeave,
    Elapsed(Duration),
    Next,
    Previous,
    JumpToPage(usize),
    Teardown,
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Resize(width) => write!(f, "resize {width}"),
            HostEvent::PointerEnter => f.write_str("enter"),
            HostEvent::PointerLeave => f.write_str("leave"),
            HostEvent::Elapsed(dt) => write!(f, "wait {}", dt.as_millis()),
            HostEvent::Next => f.write_str("next"),
            HostEvent::Previous => f.write_str("prev"),
            HostEvent::JumpToPage(page) => write!(f, "jump {page}"),
            HostEvent::Teardown => f.write_str("teardown"),
        }
    }
}
