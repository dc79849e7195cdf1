pub mod geometry;
pub mod ids;
pub mod time;

// Foundation crate: small, DOM-free primitives only.
pub use geometry::*;
pub use ids::*;
pub use time::*;
