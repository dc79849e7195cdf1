use std::cell::{Cell, RefCell};
use std::sync::OnceLock;

use behaviors::{LinkKind, PageConfig};
use console_error_panic_hook::set_once;
use runtime::LifetimeSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod anchors;
mod dom;
mod links;
mod logging;
mod nav;
mod overlay;
mod page;
mod parallax;
mod reveal;
mod skills;
mod year;

pub use dom::BindError;
pub use page::PageHandle;
use page::PageContext;

static PANIC_HOOK_SET: OnceLock<()> = OnceLock::new();

thread_local! {
    /// Behaviors wired by `start`, kept alive for the page lifetime.
    static AUTOSTARTED: RefCell<Option<LifetimeSet>> = const { RefCell::new(None) };
    /// Set once a host calls `init_page`; autostart then stands down.
    static HOST_MANAGED: Cell<bool> = const { Cell::new(false) };
}

fn install_panic_hook() {
    PANIC_HOOK_SET.get_or_init(set_once);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install_panic_hook();
    spawn_local(async move {
        if let Err(err) = autostart().await {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "page interactions failed to start: {err}"
            )));
        }
    });
    Ok(())
}

async fn autostart() -> Result<(), BindError> {
    let document = dom::document()?;
    dom::ready(&document).await?;

    let config = match page::config_from_document(&document) {
        Ok(config) => {
            logging::init(&config.log_filter);
            config
        }
        Err(err) => {
            let config = PageConfig::default();
            logging::init(&config.log_filter);
            tracing::warn!(error = %err, "ignoring #{}, using defaults", page::CONFIG_ELEMENT_ID);
            config
        }
    };
    if !autostart_wanted(&config) {
        return Ok(());
    }

    let lifetimes = page::install(&PageContext::new(config)?)?;
    AUTOSTARTED.with(|slot| {
        *slot.borrow_mut() = Some(lifetimes);
    });
    Ok(())
}

fn autostart_wanted(config: &PageConfig) -> bool {
    if !config.autostart {
        tracing::debug!("autostart disabled, waiting for init_page");
        return false;
    }
    if HOST_MANAGED.with(Cell::get) {
        tracing::debug!("init_page already wired the page, skipping autostart");
        return false;
    }
    true
}

/// Hands the page over to the host: autostart stands down and whatever it
/// already wired is torn down.
fn claim_for_host() {
    HOST_MANAGED.with(|flag| flag.set(true));
    if dispose_page() {
        tracing::debug!("replaced autostarted behaviors");
    }
}

/// Wires the page explicitly and hands back its disposer handles.
///
/// Meant for hosts that manage their own lifecycle. Behaviors already wired
/// by autostart are torn down first, and autostart is skipped if it has not
/// run yet, so every element is bound once.
#[wasm_bindgen]
pub fn init_page(config_json: Option<String>) -> Result<PageHandle, JsValue> {
    install_panic_hook();
    claim_for_host();
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?,
        None => PageConfig::default(),
    };
    logging::init(&config.log_filter);
    let lifetimes = page::install(&PageContext::new(config)?)?;
    Ok(PageHandle::new(lifetimes))
}

/// Tears down the behaviors wired by `start`. Returns whether any were active.
#[wasm_bindgen]
pub fn dispose_page() -> bool {
    let lifetimes = AUTOSTARTED.with(|slot| slot.borrow_mut().take());
    lifetimes.is_some_and(|set| !set.is_empty())
}

/// Demo-link handler, also installed as `window.openDemo`.
#[wasm_bindgen]
pub fn open_demo(event: web_sys::Event) {
    links::open_external(LinkKind::Demo, &event);
}

/// Code-link handler, also installed as `window.openCode`.
#[wasm_bindgen]
pub fn open_code(event: web_sys::Event) {
    links::open_external(LinkKind::Code, &event);
}
