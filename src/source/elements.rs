//! Read-only descriptors exposed by the vendor conceptual model
//!
//! These mirror what the vendor model lets a consumer see: names, namespaces,
//! flags, declared members, and cross references expressed as qualified names.
//! Nothing here is translated; see [`crate::translate`] for that.

use std::fmt;

/// Cardinality of one end of a relationship, as the vendor enumerates it.
///
/// `Unknown` is the vendor's default member. It is never a valid input to
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdmMultiplicity {
    #[default]
    Unknown,
    ZeroOrOne,
    One,
    Many,
}

/// Optimistic concurrency mode of a structural property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    #[default]
    None,
    Fixed,
}

impl fmt::Display for ConcurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcurrencyMode::None => f.write_str("None"),
            ConcurrencyMode::Fixed => f.write_str("Fixed"),
        }
    }
}

/// Direction of an operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterDirection {
    In,
    Out,
    InOut,
}

impl fmt::Display for ParameterDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterDirection::In => f.write_str("In"),
            ParameterDirection::Out => f.write_str("Out"),
            ParameterDirection::InOut => f.write_str("InOut"),
        }
    }
}

/// Reference to a type by its full name (e.g. `Edm.String`, `NS.Address`,
/// `Collection(NS.Order)`), together with its nullability facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub full_name: String,
    pub nullable: bool,
}

impl TypeReference {
    pub fn new(full_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            full_name: full_name.into(),
            nullable,
        }
    }
}

/// Entity set descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntitySet {
    pub name: String,
    /// Advertised element type; may be wrapped as `Collection(...)`
    pub element_type: String,
}

/// Structural (non-navigation) property descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProperty {
    pub name: String,
    pub type_ref: TypeReference,
    pub concurrency_mode: ConcurrencyMode,
}

/// The navigation property on the far end of a relationship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePartner {
    pub name: String,
    /// Qualified name of the type declaring the partner
    pub declaring_type: String,
    /// Cardinality of the partner's target, i.e. how many of the near-end
    /// type the partner sees
    pub target_multiplicity: EdmMultiplicity,
}

/// Navigation (relationship) property descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNavigationProperty {
    pub name: String,
    /// Target type reference; carried but not translated, since the partner
    /// is the only source of the translated relationship
    pub type_ref: TypeReference,
    pub partner: Option<SourcePartner>,
}

/// Entity or complex type descriptor.
///
/// Which of the two it is comes from the [`SourceSchemaType`] variant that
/// wraps it. Complex types never declare a key or navigation properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceStructuredType {
    pub namespace: String,
    pub name: String,
    /// Qualified name of the base type
    pub base_type: Option<String>,
    pub is_abstract: bool,
    pub is_open: bool,
    /// Declared key property names, in declared order. `None` when the type
    /// declares no key of its own (typically because it inherits one).
    pub key: Option<Vec<String>>,
    /// Declared structural properties only; inherited ones live on the base
    pub properties: Vec<SourceProperty>,
    /// Navigation properties as the vendor model exposes them for this type
    pub navigation_properties: Vec<SourceNavigationProperty>,
}

impl SourceStructuredType {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// Enum type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceEnumType {
    pub namespace: String,
    pub name: String,
    /// Member names and values; carried but not translated
    pub members: Vec<(String, i64)>,
}

/// A named type declared in a schema, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSchemaType {
    Entity(SourceStructuredType),
    Complex(SourceStructuredType),
    Enum(SourceEnumType),
}

impl SourceSchemaType {
    pub fn namespace(&self) -> &str {
        match self {
            SourceSchemaType::Entity(t) | SourceSchemaType::Complex(t) => &t.namespace,
            SourceSchemaType::Enum(e) => &e.namespace,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SourceSchemaType::Entity(t) | SourceSchemaType::Complex(t) => &t.name,
            SourceSchemaType::Enum(e) => &e.name,
        }
    }

    /// Full name, e.g. `NS.Customer`
    pub fn qualified_name(&self) -> String {
        qualify(self.namespace(), self.name())
    }

    /// Kind label used in log output and error context
    pub fn kind_name(&self) -> &'static str {
        match self {
            SourceSchemaType::Entity(_) => "EntityType",
            SourceSchemaType::Complex(_) => "ComplexType",
            SourceSchemaType::Enum(_) => "EnumType",
        }
    }
}

/// Function or action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OperationKind {
    Function,
    Action,
}

/// Operation parameter descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceParameter {
    pub name: String,
    pub type_ref: TypeReference,
    /// Only populated when the vendor model distinguishes directions
    pub direction: Option<ParameterDirection>,
}

/// Operation (function or action) descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOperation {
    pub namespace: String,
    pub name: String,
    pub kind: OperationKind,
    pub is_bound: bool,
    pub parameters: Vec<SourceParameter>,
    pub return_type: Option<TypeReference>,
}

pub(crate) fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}
