use foundation::geometry::{Point, Viewport};
use runtime::Lifetime;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent, Window};

use crate::dom::{self, BindError, Listener};
use crate::page::PageContext;

pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let Some(background) = dom::query(&page.document, &page.config.selectors.background)? else {
        return Ok(None);
    };
    let Ok(background) = background.dyn_into::<HtmlElement>() else {
        tracing::debug!("parallax background is not an HTML element");
        return Ok(None);
    };

    let parallax = page.config.parallax();
    let window = page.window.clone();
    let style = background.style();
    let listener = Listener::new(&page.window, "mousemove", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let pointer = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        let offset = parallax.offset(pointer, viewport(&window));
        let _ = style.set_property("transform", &parallax.transform(offset));
    })?;

    let mut lifetime = Lifetime::new("parallax");
    lifetime.hold(listener);
    Ok(Some(lifetime))
}

fn viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}
