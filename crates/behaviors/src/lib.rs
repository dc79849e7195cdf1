//! DOM-free view-models for the portfolio page behaviors.
//!
//! Each module decides *what* should change on the page for a given input;
//! the wasm adapter owns the DOM and applies the result.

pub mod anchor;
pub mod config;
pub mod links;
pub mod nav;
pub mod overlay;
pub mod parallax;
pub mod reveal;
pub mod skills;

pub use anchor::AnchorScroll;
pub use config::{ConfigError, PageConfig};
pub use links::LinkKind;
pub use nav::{NavPresentation, NavToggle};
pub use overlay::{Overlay, OverlayEffect, OverlayEvent};
pub use parallax::{Parallax, ParallaxOffset};
pub use reveal::{ClassChange, Reveal};
pub use skills::{FillPlan, SkillMeters};
