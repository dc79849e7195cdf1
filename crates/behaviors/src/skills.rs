use foundation::time::Millis;

/// Attribute where a fill's declared width is remembered after the first
/// animation resets the inline width.
pub const TARGET_WIDTH_ATTR: &str = "data-target-width";

/// Width a fill collapses to before animating.
pub const EMPTY_WIDTH: &str = "0";

/// What to do with one `.meter-fill` when its container enters view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillPlan {
    /// Width restored after the delay.
    pub target: String,
    /// Whether `target` still has to be written to [`TARGET_WIDTH_ATTR`].
    pub remember: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthStep {
    pub after: Millis,
    pub width: String,
}

impl FillPlan {
    /// Width writes in order: collapse now, restore after `delay`.
    pub fn steps(&self, delay: Millis) -> [WidthStep; 2] {
        [
            WidthStep {
                after: Millis::ZERO,
                width: EMPTY_WIDTH.to_string(),
            },
            WidthStep {
                after: delay,
                width: self.target.clone(),
            },
        ]
    }
}

/// Skill-meter fill animation. Every entry into view replays the fill.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SkillMeters {
    threshold: f64,
    delay: Millis,
}

impl SkillMeters {
    pub fn new(threshold: f64, delay: Millis) -> Self {
        Self { threshold, delay }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delay(&self) -> Millis {
        self.delay
    }

    pub fn should_animate(&self, is_intersecting: bool, ratio: f64) -> bool {
        crate::reveal::Reveal::new(self.threshold).in_view(is_intersecting, ratio)
    }

    /// Plans a fill from its current inline width and the remembered target.
    ///
    /// A remembered target wins, so a replay that starts while a previous
    /// animation left the width at `"0"` still fills to the real value. An
    /// empty target is kept as is: restoring `""` drops the inline width and
    /// hands the fill back to the stylesheet.
    pub fn plan_fill(&self, declared: &str, remembered: Option<&str>) -> FillPlan {
        match remembered {
            Some(target) => FillPlan {
                target: target.trim().to_string(),
                remember: false,
            },
            None => FillPlan {
                target: declared.trim().to_string(),
                remember: true,
            },
        }
    }
}
