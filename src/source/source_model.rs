//! Vendor model container

use std::collections::HashMap;

use super::{SourceEntitySet, SourceOperation, SourceSchemaType};

/// The complete vendor model handed to a translation pass.
///
/// Declaration order is preserved for every collection. Types are also
/// indexed by qualified name so base types and partners resolve in O(1).
#[derive(Debug, Clone, Default)]
pub struct SourceModel {
    entity_sets: Vec<SourceEntitySet>,
    types: Vec<SourceSchemaType>,
    operations: Vec<SourceOperation>,
    type_index: HashMap<String, usize>,
}

impl SourceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity set
    pub fn add_entity_set(&mut self, entity_set: SourceEntitySet) {
        self.entity_sets.push(entity_set);
    }

    /// Add a declared type. When a qualified name is declared twice, lookups
    /// keep resolving to the first declaration.
    pub fn add_type(&mut self, schema_type: SourceSchemaType) {
        let index = self.types.len();
        self.type_index
            .entry(schema_type.qualified_name())
            .or_insert(index);
        self.types.push(schema_type);
    }

    /// Add an operation
    pub fn add_operation(&mut self, operation: SourceOperation) {
        self.operations.push(operation);
    }

    pub fn with_entity_set(mut self, entity_set: SourceEntitySet) -> Self {
        self.add_entity_set(entity_set);
        self
    }

    pub fn with_type(mut self, schema_type: SourceSchemaType) -> Self {
        self.add_type(schema_type);
        self
    }

    pub fn with_operation(mut self, operation: SourceOperation) -> Self {
        self.add_operation(operation);
        self
    }

    pub fn entity_sets(&self) -> &[SourceEntitySet] {
        &self.entity_sets
    }

    pub fn types(&self) -> &[SourceSchemaType] {
        &self.types
    }

    pub fn operations(&self) -> &[SourceOperation] {
        &self.operations
    }

    /// Look up a declared type by qualified name (e.g. `NS.Customer`)
    pub fn find_type(&self, qualified_name: &str) -> Option<&SourceSchemaType> {
        self.type_index
            .get(qualified_name)
            .map(|&index| &self.types[index])
    }
}
