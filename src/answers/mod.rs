//! Answer checking: text normalization and hotspot geometry.

pub mod normalize;
pub mod hotspot;

pub use normalize::{normalize, AnswerSet};
pub use hotspot::{locate, Point};
