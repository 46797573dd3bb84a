//! Item catalogs: where the carousel's logos come from.
//!
//! Three sources, all producing a `Vec<Item>` in rotation order:
//!
//! - **Stock**: [`default_items`], the supplier list the site ships with.
//! - **Catalog file**: [`load_catalog`] reads `.toml` (`[[items]]` tables) or
//!   `.json` (an array). File order is rotation order.
//! - **Logo directory**: [`scan_logo_dir`] follows the `NNN-name` convention:
//!
//! ```text
//! logos/
//! ├── 010-SATO.png             # id 10, "SATO"
//! ├── 010-SATO.txt             # caption (optional sidecar)
//! ├── 020-PDC-Big.png          # id 20, "PDC Big"
//! ├── 030-UPM.svg
//! └── draft-logo.png           # no number prefix = skipped
//! ```
//!
//! Every source is validated the same way: ids must be unique and names must
//! not be blank.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::Item;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported catalog format (expected .toml or .json): {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Duplicate item id {0}")]
    DuplicateId(u32),
    #[error("Item {0} has an empty display name")]
    EmptyName(u32),
}

const LOGO_EXTENSIONS: &[&str] = &["png", "svg", "jpg", "jpeg", "webp", "avif"];

/// The stock supplier list.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new(
            1,
            "SATO",
            "/images/riklabel_partner_sato.png",
            "Leading provider of auto-ID solutions",
        ),
        Item::new(
            2,
            "PDC Big",
            "/images/riklabel_partner_pdcbig.png",
            "Identification and tracking solutions",
        ),
        Item::new(
            3,
            "PDC Healthcare",
            "/images/riklabel_partner_pdchc.png",
            "Healthcare identification solutions",
        ),
        Item::new(
            4,
            "UPM",
            "/images/upm.svg",
            "Sustainable packaging and labeling",
        ),
    ]
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalog {
    #[serde(default)]
    items: Vec<Item>,
}

/// Load items from a `.toml` or `.json` catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;
    let items = match ext.as_str() {
        "toml" => toml::from_str::<TomlCatalog>(&content)?.items,
        "json" => serde_json::from_str::<Vec<Item>>(&content)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };
    validate_items(&items)?;
    Ok(items)
}

/// Build items from numbered logo files in `dir`, sorted by number.
///
/// `image_ref` is the file name, so the renderer output is expected to sit
/// next to the logos. Captions come from a same-stem `.txt` sidecar.
pub fn scan_logo_dir(dir: &Path) -> Result<Vec<Item>, CatalogError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_logo(p))
        .collect();
    entries.sort();

    let mut items: Vec<Item> = entries
        .iter()
        .filter_map(|path| {
            let stem = path.file_stem()?.to_string_lossy();
            let (id, name) = parse_logo_name(&stem)?;
            let file_name = path.file_name()?.to_string_lossy().into_owned();
            Some(Item {
                id,
                display_name: name,
                image_ref: file_name,
                caption: read_sidecar(path).unwrap_or_default(),
            })
        })
        .collect();
    items.sort_by_key(|item| item.id);

    validate_items(&items)?;
    Ok(items)
}

/// Reject duplicate ids and blank names.
pub fn validate_items(items: &[Item]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.display_name.trim().is_empty() {
            return Err(CatalogError::EmptyName(item.id));
        }
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
    }
    Ok(())
}

/// Split `NNN-Display-Name` into the number and a display name with dashes
/// turned into spaces. Unnumbered or name-less stems yield `None`.
fn parse_logo_name(stem: &str) -> Option<(u32, String)> {
    let (prefix, rest) = stem.split_once('-')?;
    let id = prefix.parse::<u32>().ok()?;
    let name = rest.replace('-', " ").trim().to_string();
    if name.is_empty() {
        return None;
    }
    Some((id, name))
}

fn is_logo(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    LOGO_EXTENSIONS.contains(&ext.as_str())
}

fn read_sidecar(logo_path: &Path) -> Option<String> {
    fs::read_to_string(logo_path.with_extension("txt"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
