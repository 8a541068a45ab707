//! Translation from the vendor model to the normalized schema
//!
//! One submodule per translator. [`translate_schema`] drives a full pass and is
//! the only place that dispatches on the kind of a declared type.

mod collection;
mod entity_set;
mod entity_type;
mod key;
mod multiplicity;
mod navigation;
mod parameter;
mod property;
mod types;

use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::model::Schema;
use crate::source::{SourceModel, SourceSchemaType};
use crate::TranslateOptions;

pub use collection::{is_collection_name, resolve_collection_name};
pub use entity_set::translate_entity_set;
pub use entity_type::EntityTypeTranslator;
pub use key::{check_key_properties, translate_key};
pub use multiplicity::{map_multiplicity, MANY, ONE, ZERO_OR_ONE};
pub use navigation::translate_navigation_property;
pub use parameter::{translate_operation, translate_parameter};
pub use property::{translate_property, translate_property_type};
pub use types::{translate_complex_type, translate_enum_type};

/// Run one complete translation pass over `model`.
///
/// The pass is atomic: the first failure from any translator is returned as
/// is and no schema is produced. Types are emitted in declaration order; a
/// qualified name declared more than once is emitted for its first
/// declaration only.
pub fn translate_schema(model: &SourceModel, options: &TranslateOptions) -> Result<Schema> {
    let mut schema = Schema::new();
    let mut entity_types = EntityTypeTranslator::new(model, options.key_policy);
    let mut emitted = HashSet::new();

    schema.entity_sets = model
        .entity_sets()
        .iter()
        .map(translate_entity_set)
        .collect::<Result<Vec<_>>>()?;

    for schema_type in model.types() {
        if !emitted.insert(schema_type.qualified_name()) {
            debug!(
                type_name = schema_type.qualified_name().as_str(),
                kind = schema_type.kind_name(),
                "Skipping duplicate type declaration"
            );
            continue;
        }

        match schema_type {
            SourceSchemaType::Entity(entity_type) => {
                schema
                    .entity_types
                    .push(entity_types.translate_entity(entity_type)?);
            }
            SourceSchemaType::Complex(complex_type) => {
                schema
                    .complex_types
                    .push(translate_complex_type(model, complex_type)?);
            }
            SourceSchemaType::Enum(enum_type) => {
                schema.enum_types.push(translate_enum_type(enum_type));
            }
        }
    }

    if options.include_operations {
        schema.operations = model
            .operations()
            .iter()
            .map(|operation| translate_operation(model, operation))
            .collect::<Result<Vec<_>>>()?;
    }

    debug!(
        entity_sets = schema.entity_sets.len(),
        entity_types = schema.entity_types.len(),
        complex_types = schema.complex_types.len(),
        enum_types = schema.enum_types.len(),
        operations = schema.operations.len(),
        "Translated schema"
    );

    Ok(schema)
}

/// `Owner/Member` path used to name a member in errors
pub(crate) fn member_path(owner: &str, member: &str) -> String {
    format!("{}/{}", owner, member)
}
