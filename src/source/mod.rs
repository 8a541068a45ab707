//! Vendor conceptual model (input side of a translation pass)

mod elements;
mod source_model;

pub use elements::*;
pub use source_model::SourceModel;

pub(crate) use elements::qualify;
