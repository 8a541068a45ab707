//! Cardinality to multiplicity token mapping

use crate::error::{Result, TranslateError};
use crate::source::EdmMultiplicity;

pub const ZERO_OR_ONE: &str = "0..1";
pub const ONE: &str = "1";
pub const MANY: &str = "*";

/// Maps a vendor cardinality to its canonical token (`0..1`, `1`, `*`).
///
/// `property` is the `Type/NavigationProperty` path the cardinality belongs
/// to; it only appears in the error.
///
/// # Errors
/// Returns [`TranslateError::UnknownMultiplicity`] for any member outside the
/// three defined cardinalities. The value decides whether a relationship is
/// single- or multi-valued downstream, so it is never defaulted.
pub fn map_multiplicity(property: &str, multiplicity: EdmMultiplicity) -> Result<&'static str> {
    match multiplicity {
        EdmMultiplicity::ZeroOrOne => Ok(ZERO_OR_ONE),
        EdmMultiplicity::One => Ok(ONE),
        EdmMultiplicity::Many => Ok(MANY),
        EdmMultiplicity::Unknown => Err(TranslateError::UnknownMultiplicity {
            property: property.to_string(),
            multiplicity,
        }),
    }
}
