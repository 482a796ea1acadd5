//! pagecut - document page segmentation for PDF text analysis.
//!
//! Decomposes the recognized words of a rendered page into text blocks with
//! the recursive X-Y cut algorithm, supported by an affine transformation
//! matrix for PDF device-space geometry and a small toolkit of distance
//! measures for downstream layout analysis.

pub mod error;
pub mod geom;
pub mod layout;
pub mod transform;

pub use error::{LayoutError, Result};
pub use geom::{PdfLine, PdfPoint, PdfRectangle, PdfVector};
pub use layout::distance;
pub use layout::segmenter::{
    dominant_value, get_blocks, get_blocks_with, get_blocks_with_thresholds,
    get_blocks_with_width, partition, PartitionNode,
};
pub use layout::words::{group_into_lines, Letter, TextBlock, TextLine, Word};
pub use transform::TransformationMatrix;
