//! Complex and enum type translation

use std::collections::HashSet;

use crate::error::{Result, TranslateError};
use crate::model::{ComplexType, EnumType};
use crate::source::{SourceEnumType, SourceModel, SourceSchemaType, SourceStructuredType};

use super::property::translate_property;

/// Translate a complex type.
///
/// The result lists every structural property the type exposes, inherited
/// ones first. It has no key, navigation properties, or base type.
///
/// # Errors
/// Fails with [`TranslateError::UnresolvedType`] when a base type is missing
/// or not a complex type, and with [`TranslateError::CyclicHierarchy`] when the
/// base chain loops.
pub fn translate_complex_type(
    model: &SourceModel,
    complex_type: &SourceStructuredType,
) -> Result<ComplexType> {
    let chain = complex_base_chain(model, complex_type)?;

    let properties = chain
        .iter()
        .rev()
        .copied()
        .flat_map(|declaring| {
            let owner = declaring.qualified_name();
            declaring
                .properties
                .iter()
                .map(move |property| translate_property(model, &owner, property))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComplexType {
        namespace: complex_type.namespace.clone(),
        name: complex_type.name.clone(),
        properties,
    })
}

/// Enum types keep only their names at this layer
pub fn translate_enum_type(enum_type: &SourceEnumType) -> EnumType {
    EnumType {
        namespace: enum_type.namespace.clone(),
        name: enum_type.name.clone(),
    }
}

/// The type followed by its base types, nearest first
fn complex_base_chain<'m>(
    model: &'m SourceModel,
    complex_type: &'m SourceStructuredType,
) -> Result<Vec<&'m SourceStructuredType>> {
    let mut chain = vec![complex_type];
    let mut visited = HashSet::from([complex_type.qualified_name()]);
    let mut current = complex_type;

    while let Some(base_name) = &current.base_type {
        let base = match model.find_type(base_name) {
            Some(SourceSchemaType::Complex(base)) => base,
            _ => {
                return Err(TranslateError::UnresolvedType {
                    type_name: base_name.clone(),
                    referenced_by: current.qualified_name(),
                })
            }
        };

        let base_name = base.qualified_name();
        if !visited.insert(base_name.clone()) {
            // Report the loop from where it starts
            let mut names: Vec<String> = chain.iter().map(|t| t.qualified_name()).collect();
            let start = names.iter().position(|name| *name == base_name).unwrap_or(0);
            names.drain(..start);
            names.push(base_name.clone());
            return Err(TranslateError::CyclicHierarchy {
                type_name: base_name,
                chain: names.join(" -> "),
            });
        }

        chain.push(base);
        current = base;
    }

    Ok(chain)
}
