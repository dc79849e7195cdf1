use behaviors::{ConfigError, PageConfig};
use js_sys::Array;
use runtime::{Lifetime, LifetimeSet};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::{self, BindError};
use crate::{anchors, links, nav, overlay, parallax, reveal, skills, year};

/// Id of the optional `<script type="application/json">` holding page config.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// What every behavior installer gets to look at.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
}

impl PageContext {
    pub fn new(config: PageConfig) -> Result<Self, BindError> {
        let window = dom::window()?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        Ok(Self {
            window,
            document,
            config,
        })
    }
}

type Installer = fn(&PageContext) -> Result<Option<Lifetime>, BindError>;

/// Behaviors in installation order. Names match `Lifetime::name`.
const INSTALLERS: [(&str, Installer); 8] = [
    ("year", year::install),
    ("reveal", reveal::install),
    ("anchors", anchors::install),
    ("parallax", parallax::install),
    ("links", links::install),
    ("nav", nav::install),
    ("skills", skills::install),
    ("overlay", overlay::install),
];

/// Wires every behavior whose elements are present on the page.
///
/// A DOM failure aborts installation; whatever was wired so far is torn down
/// with the returned error.
pub fn install(page: &PageContext) -> Result<LifetimeSet, BindError> {
    let mut lifetimes = LifetimeSet::new();
    for (name, wire) in INSTALLERS {
        match wire(page)? {
            Some(lifetime) => lifetimes.insert(lifetime),
            None => tracing::debug!(behavior = name, "skipped, elements not on page"),
        }
    }
    tracing::info!(behaviors = ?lifetimes.names(), "page interactions ready");
    Ok(lifetimes)
}

/// Reads config from the `#page-config` element. An absent element means
/// defaults; malformed JSON is an error the caller decides how to report.
pub fn config_from_document(document: &Document) -> Result<PageConfig, ConfigError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) => PageConfig::from_json(&text),
        None => Ok(PageConfig::default()),
    }
}

/// Disposer handles for an initialized page, one per installed behavior.
#[wasm_bindgen]
pub struct PageHandle {
    lifetimes: LifetimeSet,
}

impl PageHandle {
    pub fn new(lifetimes: LifetimeSet) -> Self {
        Self { lifetimes }
    }
}

#[wasm_bindgen]
impl PageHandle {
    /// Tears every behavior down: listeners removed, observers disconnected,
    /// pending timers cancelled.
    pub fn dispose(&mut self) {
        self.lifetimes.dispose_all();
    }

    /// Tears down one behavior by name. Returns whether it was active.
    pub fn dispose_behavior(&mut self, name: &str) -> bool {
        self.lifetimes.dispose(name)
    }

    /// Names of the behaviors currently wired.
    pub fn behaviors(&self) -> Array {
        self.lifetimes
            .names()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::INSTALLERS;
    use pretty_assertions::assert_eq;

    #[test]
    fn installer_names_are_unique() {
        let mut names: Vec<_> = INSTALLERS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), INSTALLERS.len());
    }}
