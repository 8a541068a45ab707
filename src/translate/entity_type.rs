//! Entity type translation with base type resolution
//!
//! The base chain of a type is walked iteratively up to the first ancestor
//! already in the pass-scoped memo table (or the root), then translated from
//! the root down so each type picks up its base's `Arc`. A name seen twice
//! during the walk means the chain loops back on itself. Every type is
//! translated at most once per pass and subtypes share the same `Arc` for a
//! common base.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Result, TranslateError};
use crate::model::EntityType;
use crate::source::{SourceModel, SourceSchemaType, SourceStructuredType};
use crate::KeyPolicy;

use super::key::{check_key_properties, translate_key};
use super::navigation::translate_navigation_property;
use super::property::translate_property;

/// Untranslated base types by qualified name, nearest first
type PendingBases<'m> = Vec<(String, &'m SourceStructuredType)>;

/// Translates entity types for one pass over a [`SourceModel`].
///
/// Create one per pass. The memo table is never shared between passes.
#[derive(Debug)]
pub struct EntityTypeTranslator<'m> {
    model: &'m SourceModel,
    key_policy: KeyPolicy,
    /// Translated entity types by qualified name
    resolved: HashMap<String, Arc<EntityType>>,
}

impl<'m> EntityTypeTranslator<'m> {
    pub fn new(model: &'m SourceModel, key_policy: KeyPolicy) -> Self {
        Self {
            model,
            key_policy,
            resolved: HashMap::new(),
        }
    }

    /// Translate `schema_type` if it is an entity type.
    ///
    /// Complex and enum types yield `Ok(None)`; dispatching on the kind is the
    /// caller's job.
    pub fn translate(&mut self, schema_type: &SourceSchemaType) -> Result<Option<Arc<EntityType>>> {
        match schema_type {
            SourceSchemaType::Entity(entity_type) => self.translate_entity(entity_type).map(Some),
            SourceSchemaType::Complex(_) | SourceSchemaType::Enum(_) => Ok(None),
        }
    }

    /// Translate an entity type descriptor, reusing the memoized result when
    /// the same qualified name was already translated in this pass.
    ///
    /// # Errors
    /// [`TranslateError::CyclicHierarchy`] when the base chain revisits a type,
    /// [`TranslateError::UnresolvedType`] when a base type is missing or not an
    /// entity type, plus anything the property, key, and navigation
    /// translators report.
    pub fn translate_entity(&mut self, entity_type: &SourceStructuredType) -> Result<Arc<EntityType>> {
        let qualified_name = entity_type.qualified_name();
        if let Some(resolved) = self.resolved.get(&qualified_name) {
            trace!(entity_type = qualified_name.as_str(), "Reusing translated entity type");
            return Ok(Arc::clone(resolved));
        }

        let (ancestors, mut base_type) = self.unresolved_ancestors(&qualified_name, entity_type)?;
        for (name, source) in ancestors.into_iter().rev() {
            base_type = Some(self.build_and_record(name, source, base_type.take())?);
        }
        self.build_and_record(qualified_name, entity_type, base_type)
    }

    /// Number of entity types translated so far in this pass
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Walk the base chain of `entity_type` up to the root or the first
    /// ancestor already translated in this pass.
    ///
    /// Returns the untranslated ancestors nearest first, together with the
    /// translated type the walk stopped at, if any.
    fn unresolved_ancestors(
        &self,
        qualified_name: &str,
        entity_type: &SourceStructuredType,
    ) -> Result<(PendingBases<'m>, Option<Arc<EntityType>>)> {
        let mut ancestors: PendingBases<'m> = Vec::new();
        let mut visited = HashSet::from([qualified_name.to_string()]);
        let mut referenced_by = qualified_name.to_string();
        let mut base_name = entity_type.base_type.as_ref();

        while let Some(name) = base_name {
            let base = match self.model.find_type(name) {
                Some(SourceSchemaType::Entity(base)) => base,
                _ => {
                    return Err(TranslateError::UnresolvedType {
                        type_name: name.clone(),
                        referenced_by,
                    })
                }
            };

            let base_qualified = base.qualified_name();
            if let Some(resolved) = self.resolved.get(&base_qualified) {
                return Ok((ancestors, Some(Arc::clone(resolved))));
            }
            if !visited.insert(base_qualified.clone()) {
                return Err(cycle_error(qualified_name, &ancestors, base_qualified));
            }

            referenced_by.clone_from(&base_qualified);
            ancestors.push((base_qualified, base));
            base_name = base.base_type.as_ref();
        }

        Ok((ancestors, None))
    }

    fn build_and_record(
        &mut self,
        qualified_name: String,
        source: &SourceStructuredType,
        base_type: Option<Arc<EntityType>>,
    ) -> Result<Arc<EntityType>> {
        let translated = Arc::new(self.build(&qualified_name, source, base_type)?);
        debug!(
            entity_type = qualified_name.as_str(),
            base_type = translated.base_type.as_ref().map(|b| b.name.as_str()),
            properties = translated.properties.len(),
            navigation_properties = translated.navigation_properties.len(),
            "Translated entity type"
        );
        self.resolved.insert(qualified_name, Arc::clone(&translated));
        Ok(translated)
    }

    fn build(
        &self,
        qualified_name: &str,
        source: &SourceStructuredType,
        base_type: Option<Arc<EntityType>>,
    ) -> Result<EntityType> {
        let model = self.model;

        let properties = source
            .properties
            .iter()
            .map(|property| translate_property(model, qualified_name, property))
            .collect::<Result<Vec<_>>>()?;

        let key = translate_key(source.key.as_deref());
        if let Some(key) = &key {
            check_key_properties(qualified_name, key, &properties, self.key_policy)?;
        }

        let navigation_properties = source
            .navigation_properties
            .iter()
            .map(|property| translate_navigation_property(model, qualified_name, property))
            .collect::<Result<Vec<_>>>()?;

        Ok(EntityType {
            namespace: source.namespace.clone(),
            name: source.name.clone(),
            base_type,
            is_abstract: source.is_abstract,
            is_open: source.is_open,
            key,
            properties,
            navigation_properties,
        })
    }
}

/// Build the error for meeting `repeated` a second time while walking the
/// base chain of `qualified_name`. The chain starts where the loop starts,
/// not at the type the walk began from.
fn cycle_error(
    qualified_name: &str,
    ancestors: &[(String, &SourceStructuredType)],
    repeated: String,
) -> TranslateError {
    let walked: Vec<&str> = std::iter::once(qualified_name)
        .chain(ancestors.iter().map(|(name, _)| name.as_str()))
        .collect();
    let start = walked.iter().position(|name| *name == repeated).unwrap_or(0);

    let mut chain = walked[start..].to_vec();
    chain.push(repeated.as_str());
    let chain = chain.join(" -> ");

    TranslateError::CyclicHierarchy {
        type_name: repeated,
        chain,
    }
}
