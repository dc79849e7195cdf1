use std::cell::Cell;
use std::rc::Rc;

use behaviors::nav::CLOSED_CLEARS;
use behaviors::{NavPresentation, NavToggle};
use runtime::Lifetime;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlElement};

use crate::dom::{self, BindError, Listener};
use crate::page::PageContext;

pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let selectors = &page.config.selectors;
    let button = dom::query(&page.document, &selectors.mobile_toggle)?;
    let panel = dom::query(&page.document, &selectors.nav)?;
    let (Some(button), Some(panel)) = (button, panel) else {
        return Ok(None);
    };
    let Ok(panel) = panel.dyn_into::<HtmlElement>() else {
        return Ok(None);
    };

    let style = panel.style();
    let state = Rc::new(Cell::new(NavToggle::new()));
    let toggle = state.clone();
    let click_style = style.clone();
    let listener = Listener::new(&button, "click", move |_event| {
        let mut nav = toggle.get();
        apply(&click_style, nav.toggle());
        toggle.set(nav);
        tracing::debug!(open = nav.is_open(), "mobile nav toggled");
    })?;

    let mut lifetime = Lifetime::new("nav");
    lifetime.on_dispose(move || {
        let mut nav = state.get();
        if let Some(closed) = nav.close() {
            apply(&style, closed);
            state.set(nav);
        }
    });
    lifetime.hold(listener);
    Ok(Some(lifetime))
}

fn apply(style: &CssStyleDeclaration, presentation: NavPresentation) {
    let result = match presentation {
        NavPresentation::Open(decls) => decls
            .iter()
            .try_for_each(|(prop, value)| style.set_property(prop, value)),
        NavPresentation::Closed => style.remove_property(CLOSED_CLEARS).map(|_| ()),
    };
    if let Err(err) = result {
        tracing::warn!(error = %dom::describe(&err), "failed to restyle nav");
    }
}
