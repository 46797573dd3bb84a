//! Shared types used by the engine, the catalog loaders and the renderers.

use serde::{Deserialize, Serialize};

/// One rotating entry in the carousel, typically a partner or supplier logo.
///
/// Items are supplied once when the carousel is mounted and never mutated by
/// it. Their order in the supplied list is the rotation order; `id` is only a
/// stable key (used for `data-item` attributes and duplicate detection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub id: u32,
    /// Name shown under the logo and used as the image `alt` text.
    pub display_name: String,
    /// Path or URL of the logo image.
    pub image_ref: String,
    /// Short description shown under the name.
    #[serde(default)]
    pub caption: String,
}

impl Item {
    pub fn new(id: u32, display_name: &str, image_ref: &str, caption: &str) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            image_ref: image_ref.to_string(),
            caption: caption.to_string(),
        }
    }
}
