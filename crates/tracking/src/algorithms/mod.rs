pub mod segmentation;
pub mod extraction;

pub use segmentation::*;
pub use extraction::*;
