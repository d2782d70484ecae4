// src/extractors/mod.rs
pub mod fields;
pub mod normalize;
pub mod segment;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use fields::FieldRecord;
#[allow(unused_imports)]
pub use segment::{SegmentPair, SegmentRow};
