use behaviors::ClassChange;
use runtime::Lifetime;

use crate::dom::{self, BindError, Observer};
use crate::page::PageContext;

pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let targets = dom::query_all(&page.document, &page.config.selectors.reveal)?;
    if targets.is_empty() {
        return Ok(None);
    }

    let reveal = page.config.reveal();
    let class = page.config.classes.in_view.clone();
    let observer = Observer::new(reveal.threshold(), move |entries| {
        for entry in entries {
            let classes = entry.target().class_list();
            let change = reveal.class_change(entry.is_intersecting(), entry.intersection_ratio());
            let result = match change {
                ClassChange::Add => classes.add_1(&class),
                ClassChange::Remove => classes.remove_1(&class),
            };
            if let Err(err) = result {
                tracing::warn!(error = %dom::describe(&err), "failed to toggle reveal class");
            }
        }
    })?;
    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!(count = targets.len(), "reveal targets observed");

    let mut lifetime = Lifetime::new("reveal");
    lifetime.hold(observer);
    Ok(Some(lifetime))
}
