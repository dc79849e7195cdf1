use foundation::geometry::ClientRect;

/// Smooth scrolling for in-page `#fragment` links.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnchorScroll {
    offset_px: f64,
}

impl AnchorScroll {
    pub fn new(offset_px: f64) -> Self {
        Self { offset_px }
    }

    /// Document-space scroll position that puts `target`'s top `offset_px`
    /// below the viewport top.
    pub fn scroll_top(&self, target: ClientRect, scroll_y: f64) -> f64 {
        target.top + scroll_y - self.offset_px
    }

    /// Resolves `href` with `lookup` (element id -> rect) and returns where to
    /// scroll. `None` means the click is swallowed without scrolling.
    pub fn plan(
        &self,
        href: &str,
        scroll_y: f64,
        lookup: impl FnOnce(&str) -> Option<ClientRect>,
    ) -> Option<f64> {
        let id = fragment_id(href)?;
        let rect = lookup(id)?;
        Some(self.scroll_top(rect, scroll_y))
    }
}

/// The element id an in-page href points at: `"#about"` -> `"about"`.
///
/// The bare `"#"` and non-fragment hrefs have no target.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}
