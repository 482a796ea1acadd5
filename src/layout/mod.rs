//! Layout analysis: word model, X-Y cut segmentation, distance toolkit.
//!
//! - `words` - word/letter input model and line/block output model
//! - `segmenter` - recursive X-Y cut partition tree and block extraction
//! - `distance` - distance measures and nearest-neighbor search

pub mod distance;
pub mod segmenter;
pub mod words;

// Re-export the public vocabulary for convenience
pub use segmenter::*;
pub use words::*;
