/// Input to the image overlay, already decoded from DOM events.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverlayEvent<'a> {
    ThumbnailClicked { src: &'a str },
    CloseClicked,
    /// A click that reached the overlay; `on_backdrop` is true when the
    /// overlay itself, not one of its children, was the click target.
    OverlayClicked { on_backdrop: bool },
    KeyDown { key: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEffect {
    /// Point the overlay image at `src` and mark the overlay shown.
    Show { src: String },
    /// Clear the overlay image and unmark shown.
    Hide,
}

/// Fullscreen image overlay: CLOSED -> OPEN on a thumbnail click, back to
/// CLOSED on the close button, a backdrop click or Escape.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overlay {
    image: Option<String>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the state machine. `None` means nothing on the page changes.
    pub fn handle(&mut self, event: OverlayEvent<'_>) -> Option<OverlayEffect> {
        match event {
            OverlayEvent::ThumbnailClicked { src } => {
                self.image = Some(src.to_string());
                Some(OverlayEffect::Show {
                    src: src.to_string(),
                })
            }
            OverlayEvent::CloseClicked => self.close(),
            OverlayEvent::OverlayClicked { on_backdrop: true } => self.close(),
            OverlayEvent::OverlayClicked { on_backdrop: false } => None,
            OverlayEvent::KeyDown { key: "Escape" } => self.close(),
            OverlayEvent::KeyDown { .. } => None,
        }
    }

    /// Closes the overlay when its behavior is torn down, so the page is not
    /// left behind a modal nothing can dismiss.
    pub fn dismiss(&mut self) -> Option<OverlayEffect> {
        self.close()
    }

    fn close(&mut self) -> Option<OverlayEffect> {
        self.image.take().map(|_| OverlayEffect::Hide)
    }
}

#[cfg(test)]
impl Overlay {
    fn is_open(&self) -> bool {
        self.image.is_some()
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{Overlay, OverlayEffect, OverlayEvent};
    use pretty_assertions::assert_eq;

    fn opened(src: &str) -> Overlay {
        let mut overlay = Overlay::new();
        overlay.handle(OverlayEvent::ThumbnailClicked { src });
        overlay
    }

    #[test]
    fn thumbnail_click_opens_with_its_source() {
        let mut overlay = Overlay::new();
        let effect = overlay.handle(OverlayEvent::ThumbnailClicked { src: "img/a.png" });
        assert_eq!(
            effect,
            Some(OverlayEffect::Show {
                src: "img/a.png".to_string()
            })
        );
        assert!(overlay.is_open());
        assert_eq!(overlay.image(), Some("img/a.png"));
    }

    #[test]
    fn every_close_trigger_hides_and_clears() {
        let triggers = [
            OverlayEvent::CloseClicked,
            OverlayEvent::OverlayClicked { on_backdrop: true },
            OverlayEvent::KeyDown { key: "Escape" },
        ];
        for trigger in triggers {
            let mut overlay = opened("img/a.png");
            assert_eq!(overlay.handle(trigger), Some(OverlayEffect::Hide), "{trigger:?}");
            assert!(!overlay.is_open());
            assert_eq!(overlay.image(), None);
        }
    }

    #[test]
    fn close_triggers_while_closed_are_no_ops() {
        let mut overlay = Overlay::new();
        assert_eq!(overlay.handle(OverlayEvent::CloseClicked), None);
        assert_eq!(
            overlay.handle(OverlayEvent::OverlayClicked { on_backdrop: true }),
            None
        );
        assert_eq!(overlay.handle(OverlayEvent::KeyDown { key: "Escape" }), None);
    }

    #[test]
    fn clicks_inside_the_image_and_other_keys_keep_it_open() {
        let mut overlay = opened("img/a.png");
        assert_eq!(
            overlay.handle(OverlayEvent::OverlayClicked { on_backdrop: false }),
            None
        );
        assert_eq!(overlay.handle(OverlayEvent::KeyDown { key: "Enter" }), None);
        assert!(overlay.is_open());
    }

    #[test]
    fn dismiss_hides_an_open_overlay() {
        let mut overlay = opened("img/a.png");
        assert_eq!(overlay.dismiss(), Some(OverlayEffect::Hide));
        assert!(!overlay.is_open());
        assert_eq!(overlay.dismiss(), None);
    }

    #[test]
    fn opening_again_replaces_the_image() {
        let mut overlay = opened("img/a.png");
        overlay.handle(OverlayEvent::ThumbnailClicked { src: "img/b.png" });
        assert_eq!(overlay.image(), Some("img/b.png"));
    }
}
