use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    NoWindow,
    NoDocument,
    Dom(String),
}

impl BindError {
    pub fn dom(err: JsValue) -> Self {
        BindError::Dom(describe(&err))
    }
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::NoWindow => write!(f, "no global window"),
            BindError::NoDocument => write!(f, "window has no document"),
            BindError::Dom(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl std::error::Error for BindError {}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort message for a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub fn window() -> Result<web_sys::Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

pub fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::NoDocument)
}

pub fn query(root: &Document, selector: &str) -> Result<Option<Element>, BindError> {
    root.query_selector(selector).map_err(BindError::dom)
}

pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = root.query_selector_all(selector).map_err(BindError::dom)?;
    Ok(elements(&list))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = root.query_selector_all(selector).map_err(BindError::dom)?;
    Ok(elements(&list))
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Resolves once the document has finished parsing.
pub async fn ready(document: &Document) -> Result<(), BindError> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &options,
        ) {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    JsFuture::from(promise).await.map_err(BindError::dom)?;
    Ok(())
}

/// An event listener that is removed when the guard is dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, BindError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(BindError::dom)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` that disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new(
        threshold: f64,
        mut on_entries: impl FnMut(Vec<IntersectionObserverEntry>) + 'static,
    ) -> Result<Self, BindError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .collect();
                on_entries(entries);
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(BindError::dom)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
