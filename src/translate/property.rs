//! Structural property and property type translation

use crate::error::{Result, TranslateError};
use crate::model::{Property, PropertyType};
use crate::source::{SourceModel, SourceProperty, SourceSchemaType, TypeReference};

use super::collection::resolve_collection_name;
use super::member_path;

/// Namespace of the built-in primitive types
const PRIMITIVE_NAMESPACE_PREFIX: &str = "Edm.";

/// Translate one declared structural property of `owner` (a qualified type name)
pub fn translate_property(
    model: &SourceModel,
    owner: &str,
    property: &SourceProperty,
) -> Result<Property> {
    let property_type =
        translate_property_type(model, &property.type_ref, &member_path(owner, &property.name))?;

    Ok(Property {
        name: property.name.clone(),
        property_type,
        nullable: property.type_ref.nullable,
        concurrency_mode: property.concurrency_mode.to_string(),
    })
}

/// Translate a type reference into a [`PropertyType`].
///
/// `referenced_by` names the property, parameter, or operation holding the
/// reference and is only used for error reporting.
///
/// # Errors
/// Fails with [`TranslateError::UnresolvedType`] when the name is neither a
/// primitive nor declared in `model`, and with
/// [`TranslateError::MalformedCollectionName`] on a broken wrapper.
pub fn translate_property_type(
    model: &SourceModel,
    type_ref: &TypeReference,
    referenced_by: &str,
) -> Result<PropertyType> {
    translate_type_name(model, &type_ref.full_name, referenced_by)
}

fn translate_type_name(
    model: &SourceModel,
    type_name: &str,
    referenced_by: &str,
) -> Result<PropertyType> {
    let element_name = resolve_collection_name(type_name)?;
    if element_name != type_name {
        let element = translate_type_name(model, element_name, referenced_by)?;
        return Ok(PropertyType::Collection(Box::new(element)));
    }

    if type_name.starts_with(PRIMITIVE_NAMESPACE_PREFIX) {
        return Ok(PropertyType::Primitive(type_name.to_string()));
    }

    match model.find_type(type_name) {
        Some(SourceSchemaType::Complex(_)) => Ok(PropertyType::Complex(type_name.to_string())),
        Some(SourceSchemaType::Enum(_)) => Ok(PropertyType::Enum(type_name.to_string())),
        Some(SourceSchemaType::Entity(_)) => Ok(PropertyType::Entity(type_name.to_string())),
        None => Err(TranslateError::UnresolvedType {
            type_name: type_name.to_string(),
            referenced_by: referenced_by.to_string(),
        }),
    }
}
