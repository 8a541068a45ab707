//! Normalized schema model (output side of a translation pass)

mod elements;
mod schema;

pub use elements::*;
pub use schema::Schema;
