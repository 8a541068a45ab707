//! Translated schema graph

use std::sync::Arc;

use super::{ComplexType, EntitySet, EntityType, EnumType, Operation};

/// The complete normalized schema produced by one translation pass.
///
/// Entity types are shared through `Arc`, so a type that is both declared and
/// used as a base type appears once in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schema {
    pub entity_sets: Vec<EntitySet>,
    pub entity_types: Vec<Arc<EntityType>>,
    pub complex_types: Vec<ComplexType>,
    pub enum_types: Vec<EnumType>,
    pub operations: Vec<Operation>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entity type by qualified name
    pub fn entity_type(&self, qualified_name: &str) -> Option<&Arc<EntityType>> {
        self.entity_types
            .iter()
            .find(|t| t.qualified_name() == qualified_name)
    }

    pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.iter().find(|s| s.name == name)
    }

    pub fn complex_type(&self, qualified_name: &str) -> Option<&ComplexType> {
        self.complex_types
            .iter()
            .find(|t| t.qualified_name() == qualified_name)
    }

    pub fn enum_type(&self, qualified_name: &str) -> Option<&EnumType> {
        self.enum_types
            .iter()
            .find(|t| t.qualified_name() == qualified_name)
    }

    pub fn operation(&self, qualified_name: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|o| o.qualified_name() == qualified_name)
    }

    /// Resolve the entity type an entity set holds.
    ///
    /// Set element names may be qualified or bare, so a bare name falls back to
    /// matching the type's simple name. That fallback yields `None` when more
    /// than one namespace declares a type with the name.
    pub fn entity_type_for_set(&self, set_name: &str) -> Option<&Arc<EntityType>> {
        let set = self.entity_set(set_name)?;
        self.entity_type(&set.entity_type_name).or_else(|| {
            let mut candidates = self
                .entity_types
                .iter()
                .filter(|t| t.name == set.entity_type_name);
            let first = candidates.next()?;
            candidates.next().is_none().then_some(first)
        })
    }
}
