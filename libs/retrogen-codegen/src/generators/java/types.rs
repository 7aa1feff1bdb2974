//! Type mapping from discovery type descriptors to Java types

use crate::ir::{Primitive, TypeRef};

/// Maps discovery type descriptors to Java type names.
///
/// References resolve to the model type name, qualified by the model package
/// for all ids or only for the ids that would otherwise be shadowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapper {
    qualification: Qualification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Qualification {
    #[default]
    None,
    All { model_package: String },
    Shadowed { model_package: String, ids: Vec<String> },
}

impl TypeMapper {
    /// Mapper emitting bare model names, for code that imports the model package
    pub fn unqualified() -> Self {
        Self::default()
    }

    /// Mapper emitting `<model_package>.<Id>` for references
    pub fn qualified(model_package: impl Into<String>) -> Self {
        Self {
            qualification: Qualification::All {
                model_package: model_package.into(),
            },
        }
    }

    /// Mapper emitting bare model names except for `shadowed` ids, which are
    /// qualified because a type of the same name is in scope
    pub fn shadowing<I, S>(model_package: impl Into<String>, shadowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            qualification: Qualification::Shadowed {
                model_package: model_package.into(),
                ids: shadowed.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Java type of a model field
    pub fn map(&self, type_ref: &TypeRef) -> String {
        match type_ref {
            TypeRef::Primitive(primitive) => primitive_type(*primitive).to_string(),
            TypeRef::Array(items) => format!("List<{}>", self.map_boxed(items)),
            TypeRef::Reference(id) => self.reference(id),
        }
    }

    /// Java type of a method parameter.
    ///
    /// Optional primitives are boxed so an absent value can be passed as `null`.
    pub fn map_parameter(&self, type_ref: &TypeRef, required: bool) -> String {
        match type_ref {
            TypeRef::Primitive(primitive) if !required => boxed_type(*primitive).to_string(),
            other => self.map(other),
        }
    }

    /// Java type of a schema reference
    pub fn reference(&self, id: &str) -> String {
        match &self.qualification {
            Qualification::All { model_package } => format!("{}.{}", model_package, id),
            Qualification::Shadowed { model_package, ids } if ids.iter().any(|s| s == id) => {
                format!("{}.{}", model_package, id)
            }
            _ => id.to_string(),
        }
    }

    // Generic type arguments cannot be unboxed primitives
    fn map_boxed(&self, type_ref: &TypeRef) -> String {
        match type_ref {
            TypeRef::Primitive(primitive) => boxed_type(*primitive).to_string(),
            other => self.map(other),
        }
    }
}

/// Unboxed Java type of a primitive
pub fn primitive_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "String",
        Primitive::Integer => "int",
        Primitive::Number => "double",
        Primitive::Boolean => "boolean",
    }
}

/// Nullable Java type of a primitive
pub fn boxed_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "String",
        Primitive::Integer => "Integer",
        Primitive::Number => "Double",
        Primitive::Boolean => "Boolean",
    }
}
