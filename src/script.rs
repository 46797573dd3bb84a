//! Host event scripts.
//!
//! A script is a plain-text list of host callbacks, one per line, replayed
//! against a freshly mounted engine. It exercises exactly the interface a
//! real host uses, which makes it handy for reproducing timing issues.
//!
//! ```text
//! # wide viewport, let autoplay run, then hover
//! resize 1200
//! wait 5000
//! enter
//! wait 20000      # paused: nothing fires
//! leave
//! next
//! prev
//! jump 1
//! teardown
//! ```
//!
//! `#` starts a comment; blank lines are ignored. `wait` takes milliseconds.

use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::engine::{AutoplayState, CarouselEngine, HostEvent, PageSize};

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Parse a script into events.
pub fn parse_script(source: &str) -> Result<Vec<HostEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let event = parse_line(line).map_err(|message| ScriptError::Parse {
            line: idx + 1,
            message,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<HostEvent>, ScriptError> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

fn parse_line(line: &str) -> Result<HostEvent, String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let arg = parts.next();
    if let Some(extra) = parts.next() {
        return Err(format!("unexpected argument '{extra}'"));
    }

    match (command, arg) {
        ("resize", Some(width)) => parse_number(width, "width").map(HostEvent::Resize),
        ("wait", Some(ms)) => parse_number(ms, "milliseconds")
            .map(|ms| HostEvent::Elapsed(Duration::from_millis(ms))),
        ("jump", Some(page)) => parse_number(page, "page").map(HostEvent::JumpToPage),
        ("resize" | "wait" | "jump", None) => Err(format!("'{command}' needs an argument")),
        ("enter", None) => Ok(HostEvent::PointerEnter),
        ("leave", None) => Ok(HostEvent::PointerLeave),
        ("next", None) => Ok(HostEvent::Next),
        ("prev" | "previous", None) => Ok(HostEvent::Previous),
        ("teardown", None) => Ok(HostEvent::Teardown),
        ("enter" | "leave" | "next" | "prev" | "previous" | "teardown", Some(arg)) => {
            Err(format!("'{command}' takes no argument, got '{arg}'"))
        }
        _ => Err(format!("unknown event '{command}'")),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {what} '{value}'"))
}

/// Engine state after one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    #[serde(serialize_with = "serialize_event")]
    pub event: HostEvent,
    pub current_index: usize,
    pub page_size: PageSize,
    pub autoplay: AutoplayState,
    /// Automatic advances fired by this event.
    pub fires: u64,
}

fn serialize_event<S: serde::Serializer>(event: &HostEvent, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(event)
}

/// Dispatch every event in order and record the state after each.
pub fn replay(engine: &mut CarouselEngine, events: &[HostEvent]) -> Vec<ReplayStep> {
    events
        .iter()
        .map(|&event| {
            let fires = engine.dispatch(event);
            ReplayStep {
                event,
                current_index: engine.current_index(),
                page_size: engine.page_size(),
                autoplay: engine.autoplay_state(),
                fires,
            }
        })
        .collect()
}
