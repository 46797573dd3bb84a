//! HTML rendering of a carousel view.
//!
//! Uses [maud](https://maud.lambda.xyz/) like the rest of the site's pages:
//! compile-time templates, every interpolation escaped.
//!
//! ## Markup contract
//!
//! ```text
//! section.carousel
//! ├── h2                                  heading label
//! └── div#supplier-slider-container.carousel-viewport
//!     ├── div.carousel-strip              style="transform: translateX(<offset>%)"
//!     │   └── div.carousel-item × n       style="width: <width>%"  data-item=<id>
//!     ├── button.carousel-prev            aria-label=<previous label>
//!     ├── button.carousel-next            aria-label=<next label>
//!     └── div.carousel-indicators
//!         └── button.carousel-dot × pages aria-label=<page label>  data-page=<k>
//! ```
//!
//! The strip carries the only transform; items only carry their width. An
//! empty view renders the section without strip items, controls or dots.

use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::LabelConfig;
use crate::engine::CarouselView;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/carousel.css");

/// Format a percentage with at most four decimals and no trailing zeros.
pub fn format_percent(value: f64) -> String {
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Render the carousel section for a view.
pub fn render_carousel(view: &CarouselView<'_>, labels: &LabelConfig) -> Markup {
    let strip_style = format!(
        "transform: translateX({}%)",
        format_percent(view.strip_offset_percent)
    );
    let item_style = format!("width: {}%", format_percent(view.item_width_percent));

    html! {
        section.carousel data-page-size=(view.page_size.get()) data-autoplay=(view.autoplay.to_string()) {
            h2 { (labels.heading) }
            div.carousel-viewport id="supplier-slider-container" {
                @if !view.is_empty() {
                    div.carousel-strip style=(strip_style) {
                        @for (idx, item) in view.items.iter().enumerate() {
                            @let visible = view.visible.contains(&idx);
                            div.carousel-item
                                .visible[visible]
                                style=(item_style)
                                data-item=(item.id)
                                aria-hidden=[(!visible).then_some("true")] {
                                div.carousel-card {
                                    img src=(item.image_ref) alt=(item.display_name) loading="lazy";
                                    h3 { (item.display_name) }
                                    @if !item.caption.is_empty() {
                                        p { (item.caption) }
                                    }
                                }
                            }
                        }
                    }
                    button.carousel-prev type="button" aria-label=(labels.previous)
                        disabled[!view.can_navigate] { "‹" }
                    button.carousel-next type="button" aria-label=(labels.next)
                        disabled[!view.can_navigate] { "›" }
                    div.carousel-indicators {
                        @for dot in &view.indicators {
                            button.carousel-dot.active[dot.active]
                                type="button"
                                aria-label=(labels.page_label(dot.page))
                                aria-current=[dot.active.then_some("true")]
                                data-page=(dot.page) {}
                        }
                    }
                }
            }
        }
    }
}

/// Render a standalone HTML page around the carousel section.
pub fn render_document(view: &CarouselView<'_>, labels: &LabelConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (labels.heading) }
                style { (CSS) }
            }
            body {
                (render_carousel(view, labels))
            }
        }
    }
}

/// Write the standalone page to `path`, creating parent directories.
pub fn write_document(
    view: &CarouselView<'_>,
    labels: &LabelConfig,
    path: &Path,
) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_document(view, labels).into_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AutoplayState, PageSize};
    use crate::test_helpers::sample_items;
    use crate::types::Item;
    use tempfile::TempDir;

    fn render(items: &[Item], index: usize, page_size: PageSize) -> String {
        let view = CarouselView::derive(items, index, page_size, AutoplayState::Running);
        render_carousel(&view, &LabelConfig::default()).into_string()
    }

    #[test]
    fn format_percent_trims() {
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(-0.0), "0");
        assert_eq!(format_percent(50.0), "50");
        assert_eq!(format_percent(100.0 / 3.0), "33.3333");
        assert_eq!(format_percent(-150.0), "-150");
        assert_eq!(format_percent(-2.5), "-2.5");
    }

    #[test]
    fn strip_carries_single_shared_transform() {
        let html = render(&sample_items(4), 1, PageSize::Three);
        assert_eq!(html.matches("translateX(").count(), 1);
        assert!(html.contains("transform: translateX(-33.3333%)"));
        assert_eq!(html.matches("width: 33.3333%").count(), 4);
    }

    #[test]
    fn controls_carry_accessibility_labels() {
        let html = render(&sample_items(4), 0, PageSize::Three);
        assert!(html.contains(r#"aria-label="Previous suppliers""#));
        assert!(html.contains(r#"aria-label="Next suppliers""#));
        assert!(html.contains(r#"aria-label="Go to slide 1""#));
        assert!(html.contains(r#"aria-label="Go to slide 2""#));
        assert!(!html.contains("Go to slide 3"));
    }

    #[test]
    fn active_dot_is_marked() {
        let html = render(&sample_items(6), 2, PageSize::Two);
        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert!(html.contains(r#"class="carousel-dot active""#));
        assert!(html.contains(r#"data-page="1""#));
    }

    #[test]
    fn hidden_items_are_aria_hidden() {
        let html = render(&sample_items(4), 0, PageSize::One);
        assert_eq!(html.matches("aria-hidden=\"true\"").count(), 3);
    }

    #[test]
    fn empty_view_renders_no_items_or_dots() {
        let html = render(&[], 0, PageSize::Three);
        assert!(html.contains("supplier-slider-container"));
        assert!(!html.contains("carousel-item"));
        assert!(!html.contains("carousel-dot"));
        assert!(!html.contains("translateX"));
    }

    #[test]
    fn single_page_disables_controls() {
        let html = render(&sample_items(2), 0, PageSize::Three);
        assert_eq!(html.matches("disabled").count(), 2);
    }

    #[test]
    fn item_content_is_escaped() {
        let items = vec![Item::new(1, "<b>Acme</b>", "/a.png", "Fish & Chips")];
        let html = render(&items, 0, PageSize::One);
        assert!(!html.contains("<b>Acme"));
        assert!(html.contains("&lt;b&gt;Acme"));
        assert!(html.contains("Fish &amp; Chips"));
    }

    #[test]
    fn document_embeds_css_and_doctype() {
        let items = sample_items(3);
        let view = CarouselView::derive(&items, 0, PageSize::Two, AutoplayState::Paused);
        let doc = render_document(&view, &LabelConfig::default()).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(".carousel-strip"));
        assert!(doc.contains("<title>Our Trusted Suppliers</title>"));
        assert!(doc.contains(r#"data-autoplay="paused""#));
    }

    #[test]
    fn write_document_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/nested/index.html");
        let items = sample_items(4);
        let view = CarouselView::derive(&items, 0, PageSize::Three, AutoplayState::Running);
        write_document(&view, &LabelConfig::default(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("carousel-strip"));
    }
}
