use runtime::Lifetime;

use crate::dom::{self, BindError};
use crate::page::PageContext;

/// Stamps the current local year into the footer placeholder.
pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let Some(el) = dom::query(&page.document, &page.config.selectors.year)? else {
        return Ok(None);
    };
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
    tracing::debug!(year, "footer year stamped");
    Ok(Some(Lifetime::new("year")))
}
