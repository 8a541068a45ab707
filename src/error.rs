//! Error types for edm-schema

use thiserror::Error;

use crate::source::EdmMultiplicity;

/// Result alias used throughout the translation pass
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors that can occur while translating a source model.
///
/// Every variant is a translation-time failure. None of them is transient, and
/// any one of them aborts the whole pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Unknown multiplicity {multiplicity:?} on navigation property {property}")]
    UnknownMultiplicity {
        property: String,
        multiplicity: EdmMultiplicity,
    },

    #[error("Malformed collection type name: {type_name}")]
    MalformedCollectionName { type_name: String },

    #[error("Cyclic type hierarchy at {type_name} (base chain: {chain})")]
    CyclicHierarchy { type_name: String, chain: String },

    #[error("Unresolved partner for navigation property {property}{}", partner_type_suffix(.partner_type))]
    UnresolvedPartner {
        property: String,
        partner_type: Option<String>,
    },

    #[error("Unresolved type {type_name} (referenced by {referenced_by})")]
    UnresolvedType {
        type_name: String,
        referenced_by: String,
    },

    #[error("Key property {property} is not declared on entity type {entity_type}")]
    UnknownKeyProperty {
        entity_type: String,
        property: String,
    },
}

fn partner_type_suffix(partner_type: &Option<String>) -> String {
    match partner_type {
        Some(name) => format!(" (declaring type {} is not an entity type in the model)", name),
        None => " (no partner declared)".to_string(),
    }
}
