//! Collection wrapper handling for type names
//!
//! A type name such as `Collection(NS.Order)` stands for "a collection of
//! `NS.Order`". Only a single wrapper level is removed per call.

use crate::error::{Result, TranslateError};

const COLLECTION_PREFIX: &str = "Collection(";
const COLLECTION_SUFFIX: char = ')';

/// Strips a `Collection(...)` wrapper from a type name.
///
/// Names without the wrapper are returned unchanged, so applying this to an
/// already unwrapped name is a no-op.
///
/// # Examples
///
/// ```
/// use edm_schema::translate::resolve_collection_name;
///
/// assert_eq!(resolve_collection_name("Collection(NS.Order)").unwrap(), "NS.Order");
/// assert_eq!(resolve_collection_name("NS.Order").unwrap(), "NS.Order");
/// assert!(resolve_collection_name("Collection(NS.Order").is_err());
/// ```
///
/// # Errors
/// Returns [`TranslateError::MalformedCollectionName`] when the opening marker
/// has no matching closing parenthesis, wraps an empty name, or wraps a name
/// whose parentheses do not balance.
pub fn resolve_collection_name(type_name: &str) -> Result<&str> {
    let Some(rest) = type_name.strip_prefix(COLLECTION_PREFIX) else {
        return Ok(type_name);
    };

    match rest.strip_suffix(COLLECTION_SUFFIX) {
        Some(inner) if !inner.trim().is_empty() && is_balanced(inner) => Ok(inner),
        _ => Err(TranslateError::MalformedCollectionName {
            type_name: type_name.to_string(),
        }),
    }
}

/// Every `)` closes an earlier `(` and none is left open
fn is_balanced(name: &str) -> bool {
    let mut depth = 0usize;
    for c in name.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(rest) => depth = rest,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Whether a type name carries the collection wrapper
pub fn is_collection_name(type_name: &str) -> bool {
    type_name.starts_with(COLLECTION_PREFIX)
}
