use std::cell::RefCell;
use std::rc::Rc;

use behaviors::SkillMeters;
use behaviors::skills::TARGET_WIDTH_ATTR;
use gloo_timers::callback::Timeout;
use runtime::{Lifetime, PendingTasks};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement};

use crate::dom::{self, BindError, Observer};
use crate::page::PageContext;

/// A scheduled width restore. Dropping it cancels the timer.
struct Restore {
    _timer: Timeout,
    style: CssStyleDeclaration,
    width: String,
}

impl Restore {
    /// Writes the target width now instead of waiting for the timer.
    fn settle(self) {
        let _ = self.style.set_property("width", &self.width);
    }
}

/// Restore timers, grouped by the index of the container that started them.
type RestoreTasks = PendingTasks<usize, Restore>;

pub fn install(page: &PageContext) -> Result<Option<Lifetime>, BindError> {
    let containers = dom::query_all(&page.document, &page.config.selectors.skills)?;
    if containers.is_empty() {
        return Ok(None);
    }

    let meters = page.config.skill_meters();
    let fill_selector = page.config.selectors.meter_fill.clone();
    let pending: Rc<RefCell<RestoreTasks>> = Rc::default();

    let observed = containers.clone();
    let restores = pending.clone();
    let observer = Observer::new(meters.threshold(), move |entries| {
        for entry in entries {
            if !meters.should_animate(entry.is_intersecting(), entry.intersection_ratio()) {
                continue;
            }
            let container = entry.target();
            let Some(key) = observed.iter().position(|c| *c == container) else {
                continue;
            };
            let mut tasks = restores.borrow_mut();
            let cancelled = tasks.cancel_key(&key);
            if cancelled > 0 {
                tracing::debug!(container = key, cancelled, "replaying skill fill early");
            }
            match dom::query_all_in(&container, &fill_selector) {
                Ok(fills) => {
                    for fill in fills {
                        animate_fill(&meters, fill, key, &mut tasks);
                    }
                }
                Err(err) => tracing::warn!(error = %err, "skill fill lookup failed"),
            }
        }
    })?;
    for container in &containers {
        observer.observe(container);
    }

    let mut lifetime = Lifetime::new("skills");
    lifetime.on_dispose(move || {
        let unfinished = pending.borrow_mut().drain();
        for restore in unfinished {
            restore.settle();
        }
    });
    lifetime.hold(observer);
    Ok(Some(lifetime))
}

fn animate_fill(meters: &SkillMeters, fill: Element, key: usize, tasks: &mut RestoreTasks) {
    let Ok(fill) = fill.dyn_into::<HtmlElement>() else {
        return;
    };
    let style = fill.style();
    let declared = style.get_property_value("width").unwrap_or_default();
    let remembered = fill.get_attribute(TARGET_WIDTH_ATTR);
    let plan = meters.plan_fill(&declared, remembered.as_deref());
    if plan.remember {
        let _ = fill.set_attribute(TARGET_WIDTH_ATTR, &plan.target);
    }

    let [collapse, restore] = plan.steps(meters.delay());
    let _ = style.set_property("width", &collapse.width);
    tasks.schedule(key, move |done| {
        let timer_style = style.clone();
        let width = restore.width.clone();
        Restore {
            _timer: Timeout::new(restore.after.as_u32(), move || {
                let _ = timer_style.set_property("width", &width);
                done.mark_done();
            }),
            style,
            width: restore.width,
        }
    });
}
