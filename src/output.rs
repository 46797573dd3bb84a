//! CLI output formatting: the terminal renderer.
//!
//! The terminal view follows the same layout contract as the HTML renderer:
//! it reads a [`CarouselView`] and prints which items sit in the viewport,
//! the strip offset, and the indicator dots.
//!
//! # Output Format
//!
//! ## Carousel state
//!
//! ```text
//! Page size 3 | index 1 | autoplay running
//!     001 SATO
//!   > 002 PDC Big
//!   > 003 PDC Healthcare
//!   > 004 UPM
//! Strip offset -33.3333% | item width 33.3333%
//! Pages ● ○
//! ```
//!
//! ## Replay
//!
//! ```text
//! 001 resize 1200    index 0  page 3  running
//! 002 wait 5000      index 1  page 3  running  (+1 auto)
//! ```
//!
//! ## Catalog
//!
//! ```text
//! 001 SATO (id 1)
//!     Logo: /images/riklabel_partner_sato.png
//!     Caption: Leading provider of auto-ID solutions
//! ```
//!
//! Each section has a `format_*` function (returns `Vec<String>`, no I/O) and
//! a `print_*` wrapper that writes to stdout.

use crate::engine::{AutoplayState, CarouselEngine, CarouselView};
use crate::render::format_percent;
use crate::script::ReplayStep;
use crate::types::Item;

const MAX_CAPTION: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

// ============================================================================
// Carousel state
// ============================================================================

/// Format a view: header, item list with visible markers, layout, dots.
pub fn format_view(view: &CarouselView<'_>) -> Vec<String> {
    let mut lines = vec![format!(
        "Page size {} | index {} | autoplay {}",
        view.page_size, view.current_index, view.autoplay
    )];

    if view.is_empty() {
        lines.push("    (no items)".to_string());
        return lines;
    }

    for (idx, item) in view.items.iter().enumerate() {
        let marker = if view.visible.contains(&idx) { "  > " } else { "    " };
        lines.push(format!("{marker}{} {}", format_index(idx + 1), item.display_name));
    }

    lines.push(format!(
        "Strip offset {}% | item width {}%",
        format_percent(view.strip_offset_percent),
        format_percent(view.item_width_percent)
    ));

    let dots: Vec<&str> = view
        .indicators
        .iter()
        .map(|dot| if dot.active { "●" } else { "○" })
        .collect();
    lines.push(format!("Pages {}", dots.join(" ")));
    lines
}

/// Format an engine, including the states that have no view.
pub fn format_engine(engine: &CarouselEngine) -> Vec<String> {
    match engine.view() {
        Some(view) => format_view(&view),
        None if engine.autoplay_state() == AutoplayState::Stopped => {
            vec!["Carousel torn down".to_string()]
        }
        None => vec![format!(
            "Viewport not measured yet ({} items, autoplay {})",
            engine.item_count(),
            engine.autoplay_state()
        )],
    }
}

pub fn print_engine(engine: &CarouselEngine) {
    for line in format_engine(engine) {
        println!("{}", line);
    }
}

// ============================================================================
// Replay
// ============================================================================

/// Format one line per replayed event.
pub fn format_replay(steps: &[ReplayStep]) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            let mut line = format!(
                "{} {:<14} index {:<2} page {}  {}",
                format_index(idx + 1),
                step.event.to_string(),
                step.current_index,
                step.page_size,
                step.autoplay
            );
            if step.fires > 0 {
                line.push_str(&format!("  (+{} auto)", step.fires));
            }
            line
        })
        .collect()
}

pub fn print_replay(steps: &[ReplayStep]) {
    for line in format_replay(steps) {
        println!("{}", line);
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Format the item list in rotation order.
pub fn format_catalog(items: &[Item]) -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        lines.push(format!(
            "{} {} (id {})",
            format_index(idx + 1),
            item.display_name,
            item.id
        ));
        lines.push(format!("    Logo: {}", item.image_ref));
        if !item.caption.is_empty() {
            lines.push(format!("    Caption: {}", truncate(&item.caption, MAX_CAPTION)));
        }
    }
    lines.push(format!("{} items", items.len()));
    lines
}

pub fn print_catalog(items: &[Item]) {
    for line in format_catalog(items) {
        println!("{}", line);
    }
}
