//! # Logo Carousel
//!
//! The auto-rotating, responsive logo carousel of a marketing site: a small
//! state machine that pages through partner logos, adapts how many it shows
//! to the viewport width, and advances on a timer that pauses while the
//! pointer hovers it.
//!
//! # Architecture: Engine, Host, Renderers
//!
//! ```text
//! host callbacks ──► CarouselEngine ──► CarouselView ──► render (HTML)
//!  resize/pointer      index, page        offsets,    └─► output (terminal)
//!  clock/teardown      size, timer        dots
//! ```
//!
//! - The **engine** owns all mutable state of one instance and never fails:
//!   degenerate input clamps, late callbacks after teardown are ignored.
//! - The **host** (a browser binding, a test, the `replay` command) drives it
//!   through [`engine::HostEvents`], one callback at a time. Time is pushed in
//!   by the host rather than read from a clock, so autoplay is deterministic.
//! - **Renderers** only read a [`engine::CarouselView`], a pure derivation of
//!   index and page size. Any renderer applying the same two formulas (strip
//!   offset, item width) produces the same layout.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Rotation state, page-size tiers, autoplay timer, host interface |
//! | [`config`] | `config.toml` loading, validation and merging over stock defaults |
//! | [`catalog`] | Item sources: stock list, `.toml`/`.json` catalogs, numbered logo directories |
//! | [`script`] | Text scripts of host events and their replay |
//! | [`render`] | HTML output using Maud |
//! | [`output`] | Terminal output for the CLI |
//! | [`types`] | The shared [`types::Item`] record |
//!
//! # Design Decisions
//!
//! ## Host-Driven Time
//!
//! The autoplay timer is a countdown owned by the engine, advanced by
//! [`engine::HostEvents::on_timer_elapsed`]. There is no background thread and
//! no global interval handle: dropping the engine or tearing it down is all
//! the cancellation needed, and two instances can never share a timer.
//!
//! ## Unknown Width Until Measured
//!
//! A freshly mounted carousel has not seen the viewport yet. Rather than guess
//! a layout and jump once the first measurement arrives,
//! [`engine::CarouselEngine::view`] returns `None` until the host reports a
//! width.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod output;
pub mod render;
pub mod script;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
