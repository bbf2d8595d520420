//! Site configuration: scroll tuning, page metadata and log level.

use tracing::Level;

use crate::error::DomError;

/// Wheel/touch pixels needed to travel the whole sequence.
pub const SCROLL_DIVISOR: f64 = 1200.0;

/// Pixels per line for wheel events reported in `DOM_DELTA_LINE` mode.
pub const LINE_HEIGHT_PX: f64 = 16.0;

/// Gesture-to-progress tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub divisor: f64,
    pub line_height_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            divisor: SCROLL_DIVISOR,
            line_height_px: LINE_HEIGHT_PX,
        }
    }
}

/// Document-level metadata applied on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub lang: &'static str,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Ampup",
            description: "Some matches don’t need an introduction.",
            lang: "en",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub page: PageMeta,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            page: PageMeta::default(),
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

/// Write title, meta description and `<html lang>` into the live document.
pub fn apply_page_meta(meta: &PageMeta) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    document.set_title(meta.title);

    if let Some(root) = document.document_element() {
        root.set_attribute("lang", meta.lang)
            .map_err(DomError::element)?;
    }

    let description = match document
        .query_selector(r#"meta[name="description"]"#)
        .map_err(DomError::element)?
    {
        Some(tag) => tag,
        None => {
            let tag = document.create_element("meta").map_err(DomError::element)?;
            tag.set_attribute("name", "description")
                .map_err(DomError::element)?;
            let head = document.head().ok_or(DomError::NoDocument)?;
            head.append_child(&tag).map_err(DomError::element)?;
            tag
        }
    };
    description
        .set_attribute("content", meta.description)
        .map_err(DomError::element)?;

    tracing::debug!(title = meta.title, "page metadata applied");
    Ok(())
}
