pub mod lifetime;
pub mod pending;

pub use lifetime::*;
pub use pending::*;
