//! Parser for discovery documents
//!
//! Walks the JSON tree of a discovery document and builds the intermediate
//! representation (IR). Fields the generator does not use are ignored.

use crate::error::{Error, Result};
use crate::ir::{
    DiscoveryDocument, Location, Method, Parameter, Primitive, Property, RequestBody, Resource,
    Schema, TypeRef,
};
use serde_json::{Map, Value};

/// Body parameter name used when a request omits `parameterName`
pub const DEFAULT_BODY_PARAMETER: &str = "resource";

/// Parse a discovery document from JSON text
pub fn parse_document(json: &str) -> Result<DiscoveryDocument> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(&value)
}

/// Parse a discovery document from an already decoded JSON value
pub fn parse_value(document: &Value) -> Result<DiscoveryDocument> {
    let root = document
        .as_object()
        .ok_or_else(|| Error::Parse("document root must be a JSON object".into()))?;

    let base_url = parse_base_url(root)?;

    let mut schemas = Vec::new();
    for (key, schema) in optional_object(root, "schemas", "document")? {
        schemas.push(parse_schema(key, schema)?);
    }

    let mut resources = Vec::new();
    for (name, resource) in optional_object(root, "resources", "document")? {
        resources.push(parse_resource(name, resource)?);
    }

    Ok(DiscoveryDocument {
        base_url,
        schemas,
        resources,
    })
}

/// `baseUrl`, or `rootUrl` + `servicePath` for documents that only carry those
fn parse_base_url(root: &Map<String, Value>) -> Result<String> {
    if let Some(base_url) = root.get("baseUrl").and_then(|v| v.as_str()) {
        return Ok(base_url.to_string());
    }

    match (
        root.get("rootUrl").and_then(|v| v.as_str()),
        root.get("servicePath").and_then(|v| v.as_str()),
    ) {
        (Some(root_url), Some(service_path)) => Ok(format!("{}{}", root_url, service_path)),
        _ => Err(Error::Parse("document missing 'baseUrl'".into())),
    }
}

fn parse_schema(key: &str, schema: &Value) -> Result<Schema> {
    let context = format!("schema '{}'", key);
    let object = expect_object(schema, &context)?;

    // Fall back to the map key for schemas without an explicit id
    let id = object
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or(key)
        .to_string();

    let mut properties = Vec::new();
    for (name, property) in optional_object(object, "properties", &context)? {
        let property_context = format!("property '{}.{}'", id, name);
        properties.push(Property {
            name: name.clone(),
            description: description(property),
            type_ref: parse_type_ref(property, &property_context)?,
        });
    }

    Ok(Schema {
        id,
        description: description(schema),
        properties,
    })
}

fn parse_resource(name: &str, resource: &Value) -> Result<Resource> {
    let context = format!("resource '{}'", name);
    let object = expect_object(resource, &context)?;

    let mut methods = Vec::new();
    for (method_name, method) in optional_object(object, "methods", &context)? {
        methods.push(parse_method(name, method_name, method)?);
    }

    Ok(Resource {
        name: name.to_string(),
        methods,
    })
}

fn parse_method(resource: &str, name: &str, method: &Value) -> Result<Method> {
    let context = format!("method '{}.{}'", resource, name);
    let object = expect_object(method, &context)?;

    let http_method = required_str(object, "httpMethod", &context)?.to_string();
    let path = required_str(object, "path", &context)?.to_string();

    let request = match object.get("request") {
        Some(request) => {
            let request_context = format!("{} request", context);
            let request = expect_object(request, &request_context)?;
            Some(RequestBody {
                schema: required_str(request, "$ref", &request_context)?.to_string(),
                parameter_name: request
                    .get("parameterName")
                    .and_then(|v| v.as_str())
                    .unwrap_or(DEFAULT_BODY_PARAMETER)
                    .to_string(),
            })
        }
        None => None,
    };

    let response = match object.get("response") {
        Some(response) => {
            let response_context = format!("{} response", context);
            let response = expect_object(response, &response_context)?;
            Some(required_str(response, "$ref", &response_context)?.to_string())
        }
        None => None,
    };

    let mut parameters = Vec::new();
    for (param_name, parameter) in optional_object(object, "parameters", &context)? {
        parameters.push(parse_parameter(&context, param_name, parameter)?);
    }

    let parameter_order = match object.get("parameterOrder") {
        Some(Value::Array(names)) => names
            .iter()
            .map(|v| {
                v.as_str().map(String::from).ok_or_else(|| {
                    Error::Parse(format!("{} has a non-string parameterOrder entry", context))
                })
            })
            .collect::<Result<Vec<_>>>()?,
        Some(_) => {
            return Err(Error::Parse(format!(
                "{} parameterOrder must be an array",
                context
            )))
        }
        None => Vec::new(),
    };

    Ok(Method {
        name: name.to_string(),
        http_method,
        path,
        description: description(method),
        request,
        response,
        parameters,
        parameter_order,
    })
}

fn parse_parameter(method_context: &str, name: &str, parameter: &Value) -> Result<Parameter> {
    let context = format!("parameter '{}' of {}", name, method_context);
    let object = expect_object(parameter, &context)?;

    let mut type_ref = parse_type_ref(parameter, &context)?;
    if object.get("repeated").and_then(|v| v.as_bool()).unwrap_or(false) {
        type_ref = TypeRef::array_of(type_ref);
    }

    Ok(Parameter {
        name: name.to_string(),
        description: description(parameter),
        type_ref,
        location: object
            .get("location")
            .and_then(|v| v.as_str())
            .and_then(Location::from_name),
        required: object
            .get("required")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    })
}

/// Parse a type descriptor (`$ref`, `type: array` with `items`, or a primitive `type`)
fn parse_type_ref(descriptor: &Value, context: &str) -> Result<TypeRef> {
    let object = expect_object(descriptor, context)?;

    if let Some(reference) = object.get("$ref").and_then(|v| v.as_str()) {
        return Ok(TypeRef::reference(reference));
    }

    let type_name = object
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::Parse(format!("{} has neither 'type' nor '$ref'", context)))?;

    if type_name == "array" {
        let items = object
            .get("items")
            .ok_or_else(|| Error::Parse(format!("{} is an array without 'items'", context)))?;
        let items_context = format!("items of {}", context);
        return Ok(TypeRef::array_of(parse_type_ref(items, &items_context)?));
    }

    Primitive::from_name(type_name)
        .map(TypeRef::Primitive)
        .ok_or_else(|| Error::UnsupportedType {
            type_name: type_name.to_string(),
            context: context.to_string(),
        })
}

fn description(value: &Value) -> Option<String> {
    value
        .get("description")
        .and_then(|v| v.as_str())
        .map(String::from)
}

fn expect_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::Parse(format!("{} must be a JSON object", context)))
}

fn required_str<'a>(object: &'a Map<String, Value>, key: &str, context: &str) -> Result<&'a str> {
    object
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::Parse(format!("{} missing '{}'", context, key)))
}

/// Entries of an optional nested object; absent means empty
fn optional_object<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    context: &str,
) -> Result<impl Iterator<Item = (&'a String, &'a Value)>> {
    let entries = match object.get(key) {
        Some(value) => Some(
            value
                .as_object()
                .ok_or_else(|| Error::Parse(format!("{} '{}' must be a JSON object", context, key)))?,
        ),
        None => None,
    };
    Ok(entries.into_iter().flat_map(|map| map.iter()))
}
