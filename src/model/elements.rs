//! Normalized schema entities
//!
//! Every value here is built once per translation pass and never mutated
//! afterwards. None of them refers back into the source model.

use std::fmt;
use std::sync::Arc;

use crate::source::{qualify, OperationKind};

/// Entity set
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntitySet {
    pub name: String,
    /// Bare element type name (collection wrapper removed)
    pub entity_type_name: String,
}

/// Entity type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityType {
    pub namespace: String,
    pub name: String,
    /// Fully translated base type, shared with every other subtype of it
    pub base_type: Option<Arc<EntityType>>,
    pub is_abstract: bool,
    pub is_open: bool,
    /// Key declared on this type; `None` when inherited
    pub key: Option<Key>,
    /// Declared structural properties only
    pub properties: Vec<Property>,
    pub navigation_properties: Vec<NavigationProperty>,
}

impl EntityType {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Base types, nearest first
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.base_type.as_deref(),
        }
    }

    /// Whether `qualified_name` names this type's base or any of its ancestors
    pub fn is_derived_from(&self, qualified_name: &str) -> bool {
        self.ancestors()
            .any(|ancestor| ancestor.qualified_name() == qualified_name)
    }

    /// Structural properties including inherited ones, root-most type first
    pub fn all_properties(&self) -> Vec<&Property> {
        let mut chain: Vec<&EntityType> = self.ancestors().collect();
        chain.reverse();
        chain.push(self);
        chain
            .into_iter()
            .flat_map(|entity_type| entity_type.properties.iter())
            .collect()
    }

    /// The key in force for this type: its own, or the nearest ancestor's
    pub fn effective_key(&self) -> Option<&Key> {
        self.key
            .as_ref()
            .or_else(|| self.ancestors().find_map(|ancestor| ancestor.key.as_ref()))
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn navigation_property(&self, name: &str) -> Option<&NavigationProperty> {
        self.navigation_properties.iter().find(|p| p.name == name)
    }
}

impl Drop for EntityType {
    // Unlink the base chain one level at a time so releasing the last handle
    // to a deep hierarchy does not recurse once per ancestor.
    fn drop(&mut self) {
        let mut base_type = self.base_type.take();
        while let Some(base) = base_type {
            base_type = match Arc::try_unwrap(base) {
                Ok(mut owned) => owned.base_type.take(),
                Err(_) => None,
            };
        }
    }
}

/// Iterator over an entity type's base chain
pub struct Ancestors<'a> {
    next: Option<&'a EntityType>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a EntityType;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base_type.as_deref();
        Some(current)
    }
}

/// Complex type: a pure value container
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComplexType {
    pub namespace: String,
    pub name: String,
    /// All structural properties, inherited ones first
    pub properties: Vec<Property>,
}

impl ComplexType {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// Enum type (members are not modeled at this layer)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumType {
    pub namespace: String,
    pub name: String,
}

impl EnumType {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// Structural type of a property, parameter, or return value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PropertyType {
    /// Built-in `Edm.*` type
    Primitive(String),
    Complex(String),
    Enum(String),
    Entity(String),
    Collection(Box<PropertyType>),
}

impl PropertyType {
    /// Element type for collections, the type itself otherwise
    pub fn element_type(&self) -> &PropertyType {
        match self {
            PropertyType::Collection(inner) => inner.element_type(),
            other => other,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, PropertyType::Collection(_))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Primitive(name)
            | PropertyType::Complex(name)
            | PropertyType::Enum(name)
            | PropertyType::Entity(name) => f.write_str(name),
            PropertyType::Collection(inner) => write!(f, "Collection({})", inner),
        }
    }
}

/// Structural property
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Property {
    pub name: String,
    pub property_type: PropertyType,
    pub nullable: bool,
    /// Canonical concurrency mode token (`None` or `Fixed`)
    pub concurrency_mode: String,
}

/// Navigation property
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavigationProperty {
    pub name: String,
    /// Name of the entity type declaring the partner
    pub partner_name: String,
    /// Low-fidelity role fields kept for older schema consumers
    pub from_role: String,
    pub to_role: String,
    /// Always empty: the source model exposes no relationship name
    pub relationship: String,
    /// One of `0..1`, `1`, `*`
    pub multiplicity: String,
}

impl NavigationProperty {
    /// Whether downstream code should treat this relationship as multi-valued
    pub fn is_many(&self) -> bool {
        self.multiplicity == "*"
    }
}

/// Entity key: property names in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Key {
    pub properties: Vec<String>,
}

/// Operation parameter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameter {
    pub name: String,
    pub parameter_type: PropertyType,
    /// `In`, `Out`, `InOut`, or empty when the source has no direction
    pub mode: String,
}

/// Function or action
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Operation {
    pub namespace: String,
    pub name: String,
    pub kind: OperationKind,
    pub is_bound: bool,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<PropertyType>,
}

impl Operation {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}
