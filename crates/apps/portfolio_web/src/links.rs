use behaviors::LinkKind;
use behaviors::links::{NEW_CONTEXT_TARGET, external_url};
use runtime::Lifetime;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::dom::{self, BindError, Listener};
use crate::page::PageContext;

/// Shared body of `openDemo` and `openCode`: open the link in a new browsing
/// context instead of navigating, unless its href is a placeholder.
pub fn open_external(kind: LinkKind, event: &Event) {
    event.prevent_default();
    let href = link_href(event);
    let Some(url) = external_url(href.as_deref()) else {
        tracing::debug!(kind = kind.as_str(), "placeholder link, not opening");
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, NEW_CONTEXT_TARGET) {
        Ok(Some(_)) => tracing::debug!(kind = kind.as_str(), url, "opened external link"),
        Ok(None) => tracing::warn!(url, "new browsing context was blocked"),
        Err(err) => tracing::warn!(url, error = %dom::describe(&err), "window.open failed"),
    }
}

/// The clicked link's href. The element the handler is bound to wins over
/// whatever child was actually clicked.
fn link_href(event: &Event) -> Option<String> {
    [event.current_target(), event.target()]
        .into_iter()
        .flatten()
        .filter_map(|t| t.dyn_into::<Element>().ok())
        .find_map(|el| el.get_attribute("href"))
}

/// Publishes `window.openDemo` / `window.openCode` and binds the designated
/// demo/code links.
pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let selectors = &page.config.selectors;
    let mut lifetime = Lifetime::new("links");

    for kind in LinkKind::ALL {
        let handler =
            Closure::<dyn FnMut(Event)>::new(move |event: Event| open_external(kind, &event));
        let key = JsValue::from_str(kind.global_name());
        js_sys::Reflect::set(&page.window, &key, handler.as_ref()).map_err(BindError::dom)?;
        lifetime.hold(handler);
        let window = page.window.clone();
        lifetime.on_dispose(move || {
            let _ = js_sys::Reflect::delete_property(&window, &key);
        });

        let selector = match kind {
            LinkKind::Demo => &selectors.demo_links,
            LinkKind::Code => &selectors.code_links,
        };
        for link in dom::query_all(&page.document, selector)? {
            lifetime.hold(Listener::new(&link, "click", move |event| {
                open_external(kind, &event)
            })?);
        }
    }
    Ok(Some(lifetime))
}
