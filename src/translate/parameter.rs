//! Operation and parameter translation

use crate::error::Result;
use crate::model::{Operation, Parameter};
use crate::source::{qualify, SourceModel, SourceOperation, SourceParameter};

use super::member_path;
use super::property::translate_property_type;

/// Translate one parameter of `operation` (a qualified operation name).
///
/// `mode` is the direction token when the source exposes one, empty otherwise.
pub fn translate_parameter(
    model: &SourceModel,
    operation: &str,
    parameter: &SourceParameter,
) -> Result<Parameter> {
    let parameter_type = translate_property_type(
        model,
        &parameter.type_ref,
        &member_path(operation, &parameter.name),
    )?;

    Ok(Parameter {
        name: parameter.name.clone(),
        parameter_type,
        mode: parameter
            .direction
            .map(|direction| direction.to_string())
            .unwrap_or_default(),
    })
}

/// Translate a function or action with its parameters in declared order
pub fn translate_operation(model: &SourceModel, operation: &SourceOperation) -> Result<Operation> {
    let qualified_name = qualify(&operation.namespace, &operation.name);

    let parameters = operation
        .parameters
        .iter()
        .map(|parameter| translate_parameter(model, &qualified_name, parameter))
        .collect::<Result<Vec<_>>>()?;

    let return_type = operation
        .return_type
        .as_ref()
        .map(|type_ref| translate_property_type(model, type_ref, &qualified_name))
        .transpose()?;

    Ok(Operation {
        namespace: operation.namespace.clone(),
        name: operation.name.clone(),
        kind: operation.kind,
        is_bound: operation.is_bound,
        parameters,
        return_type,
    })
}
