//! Entity set translation

use crate::error::Result;
use crate::model::EntitySet;
use crate::source::SourceEntitySet;

use super::collection::resolve_collection_name;

/// Translate an entity set, unwrapping its advertised element type name
pub fn translate_entity_set(entity_set: &SourceEntitySet) -> Result<EntitySet> {
    Ok(EntitySet {
        name: entity_set.name.clone(),
        entity_type_name: resolve_collection_name(&entity_set.element_type)?.to_string(),
    })
}
