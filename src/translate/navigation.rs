//! Navigation property translation

use crate::error::{Result, TranslateError};
use crate::model::NavigationProperty;
use crate::source::{SourceModel, SourceNavigationProperty, SourceSchemaType};

use super::member_path;
use super::multiplicity::map_multiplicity;

/// Translate one navigation property exposed on `owner` (a qualified type name).
///
/// The multiplicity is the partner's target cardinality, i.e. how many of
/// `owner` the far end sees. The role fields carry only what the source model
/// exposes: `from_role` is the property's own name, `to_role` the partner's,
/// and `relationship` stays empty.
///
/// # Errors
/// [`TranslateError::UnresolvedPartner`] when there is no partner or its
/// declaring type is not an entity type in `model`;
/// [`TranslateError::UnknownMultiplicity`] when the partner's cardinality is
/// not one of the three defined members.
pub fn translate_navigation_property(
    model: &SourceModel,
    owner: &str,
    property: &SourceNavigationProperty,
) -> Result<NavigationProperty> {
    let path = member_path(owner, &property.name);

    let Some(partner) = &property.partner else {
        return Err(TranslateError::UnresolvedPartner {
            property: path,
            partner_type: None,
        });
    };

    let partner_name = match model.find_type(&partner.declaring_type) {
        Some(SourceSchemaType::Entity(declaring)) => declaring.name.clone(),
        _ => {
            return Err(TranslateError::UnresolvedPartner {
                property: path,
                partner_type: Some(partner.declaring_type.clone()),
            })
        }
    };

    let multiplicity = map_multiplicity(&path, partner.target_multiplicity)?;

    Ok(NavigationProperty {
        name: property.name.clone(),
        partner_name,
        from_role: property.name.clone(),
        to_role: partner.name.clone(),
        relationship: String::new(),
        multiplicity: multiplicity.to_string(),
    })
}
