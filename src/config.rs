//! Carousel configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. User files are
//! sparse overlays on top of the stock defaults: override just the keys you
//! care about, everything else keeps its default.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [autoplay]
//! interval_ms = 5000        # Time between automatic advances
//! enabled = true            # false = manual navigation only
//!
//! [breakpoints]
//! medium = 768              # Viewport width at which two items show
//! large = 1024              # Viewport width at which three items show
//!
//! [labels]
//! previous = "Previous suppliers"
//! next = "Next suppliers"
//! page = "Go to slide {page}"   # {page} is the 1-based page number
//! heading = "Our Trusted Suppliers"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::engine::Breakpoints;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Placeholder replaced by the 1-based page number in [`LabelConfig::page`].
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Carousel configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Automatic advance settings.
    pub autoplay: AutoplayConfig,
    /// Viewport width tiers that pick the page size.
    pub breakpoints: BreakpointConfig,
    /// Text for headings and accessibility labels.
    pub labels: LabelConfig,
}

impl CarouselConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "autoplay.interval_ms must be greater than 0".into(),
            ));
        }
        if self.breakpoints.medium >= self.breakpoints.large {
            return Err(ConfigError::Validation(
                "breakpoints.medium must be smaller than breakpoints.large".into(),
            ));
        }
        if !self.labels.page.contains(PAGE_PLACEHOLDER) {
            return Err(ConfigError::Validation(format!(
                "labels.page must contain {PAGE_PLACEHOLDER}"
            )));
        }
        Ok(())
    }
}

/// Autoplay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoplayConfig {
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
    /// When false the timer is never armed.
    pub enabled: bool,
}

impl AutoplayConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            enabled: true,
        }
    }
}

/// Viewport width thresholds, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreakpointConfig {
    pub medium: u32,
    pub large: u32,
}

impl BreakpointConfig {
    pub fn to_breakpoints(&self) -> Breakpoints {
        Breakpoints {
            medium: self.medium,
            large: self.large,
        }
    }
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        let stock = Breakpoints::default();
        Self {
            medium: stock.medium,
            large: stock.large,
        }
    }
}

/// Visible and accessibility text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// `aria-label` of the previous control.
    pub previous: String,
    /// `aria-label` of the next control.
    pub next: String,
    /// `aria-label` template of an indicator dot.
    pub page: String,
    /// Section heading above the strip.
    pub heading: String,
}

impl LabelConfig {
    /// Label of the indicator for zero-based `page`.
    pub fn page_label(&self, page: usize) -> String {
        self.page.replace(PAGE_PLACEHOLDER, &(page + 1).to_string())
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            previous: "Previous suppliers".to_string(),
            next: "Next suppliers".to_string(),
            page: "Go to slide {page}".to_string(),
            heading: "Our Trusted Suppliers".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(CarouselConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` when the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<CarouselConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CarouselConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of the
/// stock defaults.
pub fn load_config(dir: &Path) -> Result<CarouselConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Logo Carousel Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Autoplay
# ---------------------------------------------------------------------------
[autoplay]
# Milliseconds between automatic advances. Hovering the carousel pauses it;
# leaving restarts a full interval.
interval_ms = 5000

# Set to false for manual navigation only.
enabled = true

# ---------------------------------------------------------------------------
# Responsive breakpoints (viewport width in CSS pixels)
# ---------------------------------------------------------------------------
[breakpoints]
# Below `medium` one item shows, from `medium` two, from `large` three.
medium = 768
large = 1024

# ---------------------------------------------------------------------------
# Labels
# ---------------------------------------------------------------------------
[labels]
previous = "Previous suppliers"
next = "Next suppliers"
# {page} is replaced by the 1-based page number.
page = "Go to slide {page}"
heading = "Our Trusted Suppliers"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = CarouselConfig::default();
        assert_eq!(config.autoplay.interval_ms, 5000);
        assert!(config.autoplay.enabled);
        assert_eq!(config.breakpoints.medium, 768);
        assert_eq!(config.breakpoints.large, 1024);
        assert_eq!(config.labels.previous, "Previous suppliers");
    }

    #[test]
    fn interval_as_duration() {
        let config = AutoplayConfig {
            interval_ms: 2500,
            enabled: true,
        };
        assert_eq!(config.interval(), Duration::from_millis(2500));
    }

    #[test]
    fn page_label_is_one_based() {
        let labels = LabelConfig::default();
        assert_eq!(labels.page_label(0), "Go to slide 1");
        assert_eq!(labels.page_label(3), "Go to slide 4");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[autoplay]
interval_ms = 3000
"#;
        let config: CarouselConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.autoplay.interval_ms, 3000);
        // Untouched keys keep their defaults
        assert!(config.autoplay.enabled);
        assert_eq!(config.breakpoints.large, 1024);
    }

    #[test]
    fn breakpoints_convert_to_engine_tiers() {
        let config = BreakpointConfig {
            medium: 600,
            large: 900,
        };
        let tiers = config.to_breakpoints();
        assert_eq!(tiers.medium, 600);
        assert_eq!(tiers.large, 900);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[labels]
heading = "Partners"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.labels.heading, "Partners");
        assert_eq!(config.labels.next, "Next suppliers");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[autoplay]
interval_ms = 0
"#,
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[breakpoints]
medium = 768
large = 1024
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[breakpoints]
large = 1280
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let bp = merged.get("breakpoints").unwrap();
        assert_eq!(bp.get("large").unwrap().as_integer(), Some(1280));
        assert_eq!(bp.get("medium").unwrap().as_integer(), Some(768));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1").unwrap();
        let overlay: toml::Value = toml::from_str("a = 2").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(2));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<CarouselConfig, _> = toml::from_str(
            r#"
[autoplay]
intervall_ms = 10
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<CarouselConfig, _> = toml::from_str("[theme]\ncolor = \"red\"\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(CarouselConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_breakpoints_order() {
        let mut config = CarouselConfig::default();
        config.breakpoints.medium = 1024;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("breakpoints"));
    }

    #[test]
    fn validate_page_label_placeholder() {
        let mut config = CarouselConfig::default();
        config.labels.page = "Go to slide".to_string();
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // resolve_config / stock config tests
    // =========================================================================

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str("[autoplay]\nenabled = false\n").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert!(!config.autoplay.enabled);
        assert_eq!(config.autoplay.interval_ms, 5000);
    }

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: CarouselConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("autoplay").is_some());
        assert!(val.get("breakpoints").is_some());
        assert!(val.get("labels").is_some());
    }
}
