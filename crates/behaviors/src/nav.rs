/// Inline style block that turns the navigation panel into a dropdown.
pub const DROPDOWN_STYLE: &[(&str, &str)] = &[
    ("display", "flex"),
    ("flex-direction", "column"),
    (
        "background",
        "linear-gradient(180deg, rgba(255,255,255,0.03), rgba(255,255,255,0.02))",
    ),
    ("padding", "12px"),
    ("position", "absolute"),
    ("right", "16px"),
    ("top", "66px"),
    ("border-radius", "10px"),
    ("box-shadow", "0 12px 40px rgba(0,0,0,0.6)"),
];

/// Property cleared when the dropdown closes; the stylesheet takes over again.
pub const CLOSED_CLEARS: &str = "display";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavPresentation {
    /// Apply these inline declarations.
    Open(&'static [(&'static str, &'static str)]),
    /// Remove the inline `display` override.
    Closed,
}

/// Mobile navigation toggle.
///
/// The open flag lives here and is pushed to the DOM one way; the panel's
/// inline style is never read back.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> NavPresentation {
        self.open = !self.open;
        self.presentation()
    }

    /// Forces the panel closed. `None` when it already was.
    pub fn close(&mut self) -> Option<NavPresentation> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(NavPresentation::Closed)
    }

    pub fn presentation(&self) -> NavPresentation {
        if self.open {
            NavPresentation::Open(DROPDOWN_STYLE)
        } else {
            NavPresentation::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DROPDOWN_STYLE, NavPresentation, NavToggle};
    use pretty_assertions::assert_eq;

    #[test]
    fn first_toggle_opens_as_flex_column() {
        let mut nav = NavToggle::new();
        assert!(!nav.is_open());
        let NavPresentation::Open(decls) = nav.toggle() else {
            panic!("expected open");
        };
        assert_eq!(decls[0], ("display", "flex"));
        assert!(decls.contains(&("flex-direction", "column")));
        assert!(nav.is_open());
    }

    #[test]
    fn toggling_twice_restores_closed_state() {
        let mut nav = NavToggle::new();
        let before = nav;
        nav.toggle();
        assert_eq!(nav.toggle(), NavPresentation::Closed);
        assert_eq!(nav, before);
    }

    #[test]
    fn close_clears_an_open_dropdown_once() {
        let mut nav = NavToggle::new();
        assert_eq!(nav.close(), None);
        nav.toggle();
        assert_eq!(nav.close(), Some(NavPresentation::Closed));
        assert!(!nav.is_open());
        assert_eq!(nav.close(), None);
    }

    #[test]
    fn dropdown_style_sets_every_property_once() {
        let mut props: Vec<_> = DROPDOWN_STYLE.iter().map(|(p, _)| *p).collect();
        props.sort_unstable();
        props.dedup();
        assert_eq!(props.len(), DROPDOWN_STYLE.len());
    }
}
