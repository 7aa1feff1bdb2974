//! Parameter ordering for generated method signatures

use crate::error::{Error, Result};
use crate::ir::{Method, Parameter};

/// Order a method's parameters for its generated signature.
///
/// Parameters named in `parameterOrder` come first, in that sequence. The
/// remaining parameters follow in document order. A name repeated in
/// `parameterOrder` is only placed once, at its first position.
///
/// Fails with [`Error::MissingParameter`] if `parameterOrder` names a parameter
/// the method does not declare.
pub fn order_parameters(method: &Method) -> Result<Vec<&Parameter>> {
    let mut ordered: Vec<&Parameter> = Vec::with_capacity(method.parameters.len());

    for name in &method.parameter_order {
        let parameter = method
            .parameter(name)
            .ok_or_else(|| Error::MissingParameter {
                method: method.name.clone(),
                parameter: name.clone(),
            })?;
        if !ordered.iter().any(|p| p.name == parameter.name) {
            ordered.push(parameter);
        }
    }

    ordered.extend(
        method
            .parameters
            .iter()
            .filter(|p| !method.parameter_order.contains(&p.name)),
    );

    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Primitive, TypeRef};

    fn param(name: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            description: None,
            type_ref: TypeRef::Primitive(Primitive::String),
            location: None,
            required: false,
        }
    }

    fn method(parameters: &[&str], order: &[&str]) -> Method {
        Method {
            name: "list".into(),
            http_method: "GET".into(),
            path: "items".into(),
            description: None,
            request: None,
            response: None,
            parameters: parameters.iter().map(|n| param(n)).collect(),
            parameter_order: order.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn names(method: &Method) -> Vec<String> {
        order_parameters(method)
            .unwrap()
            .into_iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn test_ordered_names_first_then_declaration_order() {
        assert_eq!(names(&method(&["a", "b", "c"], &["b", "a"])), ["b", "a", "c"]);
    }

    #[test]
    fn test_no_parameter_order_keeps_declaration_order() {
        assert_eq!(names(&method(&["z", "a", "m"], &[])), ["z", "a", "m"]);
    }

    #[test]
    fn test_no_parameters() {
        assert!(names(&method(&[], &[])).is_empty());
    }

    #[test]
    fn test_remaining_parameters_are_not_sorted() {
        assert_eq!(
            names(&method(&["pageToken", "id", "maxResults"], &["id"])),
            ["id", "pageToken", "maxResults"]
        );
    }

    #[test]
    fn test_repeated_order_entry_is_placed_once() {
        assert_eq!(names(&method(&["a", "b"], &["b", "b"])), ["b", "a"]);
    }

    #[test]
    fn test_unknown_order_entry_is_fatal() {
        let err = order_parameters(&method(&["a"], &["a", "ghost"])).unwrap_err();
        match err {
            Error::MissingParameter { method, parameter } => {
                assert_eq!(method, "list");
                assert_eq!(parameter, "ghost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
