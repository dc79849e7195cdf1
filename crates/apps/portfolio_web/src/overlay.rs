use std::cell::RefCell;
use std::rc::Rc;

use behaviors::{Overlay, OverlayEffect, OverlayEvent};
use runtime::Lifetime;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::dom::{self, BindError, Listener};
use crate::page::PageContext;

const MISSING_ELEMENTS: &str = "Image overlay elements not found in DOM.";

/// Owns the overlay state machine and the elements it drives.
struct OverlayController {
    state: RefCell<Overlay>,
    overlay: Element,
    image: HtmlImageElement,
    shown_class: String,
}

impl OverlayController {
    fn dispatch(&self, event: OverlayEvent<'_>) {
        let effect = self.state.borrow_mut().handle(event);
        if let Some(effect) = effect {
            self.apply(effect);
        }
    }

    fn dismiss(&self) {
        let effect = self.state.borrow_mut().dismiss();
        if let Some(effect) = effect {
            self.apply(effect);
        }
    }

    fn apply(&self, effect: OverlayEffect) {
        let classes = self.overlay.class_list();
        let result = match effect {
            OverlayEffect::Show { src } => {
                self.image.set_src(&src);
                classes.add_1(&self.shown_class)
            }
            OverlayEffect::Hide => {
                self.image.set_src("");
                classes.remove_1(&self.shown_class)
            }
        };
        if let Err(err) = result {
            tracing::warn!(error = %dom::describe(&err), "failed to update overlay class");
        }
    }
}

pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let selectors = &page.config.selectors;
    let overlay = dom::query(&page.document, &selectors.overlay)?;
    let image = dom::query(&page.document, &selectors.overlay_image)?
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
    let close = match &overlay {
        Some(overlay) => overlay
            .query_selector(&selectors.overlay_close)
            .map_err(BindError::dom)?,
        None => None,
    };
    let (Some(overlay), Some(image), Some(close)) = (overlay, image, close) else {
        tracing::warn!("{MISSING_ELEMENTS}");
        return Ok(None);
    };

    let controller = Rc::new(OverlayController {
        state: RefCell::new(Overlay::new()),
        overlay: overlay.clone(),
        image,
        shown_class: page.config.classes.overlay_shown.clone(),
    });
    let mut lifetime = Lifetime::new("overlay");
    let ctl = controller.clone();
    lifetime.on_dispose(move || ctl.dismiss());

    for thumb in dom::query_all(&page.document, &selectors.thumbnails)? {
        if let Some(el) = thumb.dyn_ref::<HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("cursor", "zoom-in");
            lifetime.on_dispose(move || {
                let _ = style.remove_property("cursor");
            });
        }
        let ctl = controller.clone();
        let source = thumb.clone();
        lifetime.hold(Listener::new(&thumb, "click", move |_event| {
            let src = thumbnail_src(&source);
            ctl.dispatch(OverlayEvent::ThumbnailClicked { src: &src });
        })?);
    }

    let ctl = controller.clone();
    lifetime.hold(Listener::new(&close, "click", move |_event| {
        ctl.dispatch(OverlayEvent::CloseClicked);
    })?);

    let ctl = controller.clone();
    let backdrop = EventTarget::from(overlay.clone());
    lifetime.hold(Listener::new(&overlay, "click", move |event| {
        let on_backdrop = event.target().is_some_and(|t| t == backdrop);
        ctl.dispatch(OverlayEvent::OverlayClicked { on_backdrop });
    })?);

    let ctl = controller;
    lifetime.hold(Listener::new(&page.document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            ctl.dispatch(OverlayEvent::KeyDown { key: &key.key() });
        }
    })?);

    Ok(Some(lifetime))
}

/// Resolved `src` of an `<img>` thumbnail, or the raw attribute otherwise.
fn thumbnail_src(thumb: &Element) -> String {
    match thumb.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.src(),
        None => thumb.get_attribute("src").unwrap_or_default(),
    }
}
