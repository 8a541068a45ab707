//! Entity key translation

use tracing::warn;

use crate::error::{Result, TranslateError};
use crate::model::{Key, Property};
use crate::KeyPolicy;

/// Translate a declared key. Order is preserved: composite keys are matched
/// positionally downstream.
pub fn translate_key(key: Option<&[String]>) -> Option<Key> {
    key.map(|names| Key {
        properties: names.to_vec(),
    })
}

/// Check that every key property is declared on the same entity type.
///
/// # Errors
/// With [`KeyPolicy::Reject`], fails with [`TranslateError::UnknownKeyProperty`]
/// on the first key name that has no matching declared property.
pub fn check_key_properties(
    entity_type: &str,
    key: &Key,
    properties: &[Property],
    policy: KeyPolicy,
) -> Result<()> {
    for name in &key.properties {
        if properties.iter().any(|p| &p.name == name) {
            continue;
        }
        match policy {
            KeyPolicy::Reject => {
                return Err(TranslateError::UnknownKeyProperty {
                    entity_type: entity_type.to_string(),
                    property: name.clone(),
                })
            }
            KeyPolicy::Accept => {
                warn!(
                    entity_type,
                    property = name.as_str(),
                    "Key property is not declared on the entity type"
                );
            }
        }
    }
    Ok(())
}
