use foundation::geometry::ClientRect;
use runtime::Lifetime;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::dom::{self, BindError, Listener};
use crate::page::PageContext;

/// Smooth scrolling for in-page anchor links.
pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let links = dom::query_all(&page.document, &page.config.selectors.anchors)?;
    if links.is_empty() {
        return Ok(None);
    }

    let anchors = page.config.anchor_scroll();
    let mut lifetime = Lifetime::new("anchors");
    for link in links {
        let window = page.window.clone();
        let document = page.document.clone();
        let href_source = link.clone();
        let listener = Listener::new(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let top = anchors.plan(&href, scroll_y, |id| {
                let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
                Some(ClientRect::new(rect.top(), rect.left(), rect.width(), rect.height()))
            });
            let Some(top) = top else {
                tracing::debug!(href = %href, "anchor has no target");
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
        lifetime.hold(listener);
    }
    Ok(Some(lifetime))
}
