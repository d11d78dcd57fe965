#![deny(missing_docs)]

//! # Parameter Builder
//!
//! Produces the parameter list of one operation: path parameters first, then
//! declared endpoint arguments as query parameters. Names are unique; a
//! declared argument that shadows a path parameter is dropped.

use crate::oas::models::{ParamLocation, Parameter, ParameterSchema};
use crate::wp::shapes::{ArgSpec, EndpointEntry};

/// A required `string` path parameter.
pub fn path_parameter(name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        location: ParamLocation::Path,
        required: true,
        schema: ParameterSchema::string(),
        description: format!("Path parameter: {}", name),
    }
}

/// A query parameter derived from a WordPress argument schema.
pub fn query_parameter(name: &str, spec: &ArgSpec<'_>) -> Parameter {
    Parameter {
        name: name.to_string(),
        location: ParamLocation::Query,
        required: spec.required(),
        schema: ParameterSchema {
            schema_type: spec.schema_type().to_string(),
            enum_values: spec.enum_values().cloned(),
        },
        description: spec.description().to_string(),
    }
}

/// Builds the ordered, deduplicated parameter list for `endpoint`.
pub fn build_parameters(path_params: &[String], endpoint: &EndpointEntry<'_>) -> Vec<Parameter> {
    let mut parameters: Vec<Parameter> = path_params.iter().map(|p| path_parameter(p)).collect();

    for (name, spec) in endpoint.args() {
        if parameters.iter().any(|p| p.name == name) {
            continue;
        }
        parameters.push(query_parameter(name, &spec));
    }

    parameters
}
