//! Intermediate Representation (IR)
//!
//! Immutable view of a discovery document: schemas, resources, methods and their
//! type descriptors. Every collection keeps the order of the source document.

/// A parsed discovery document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryDocument {
    /// Base URL of the API, used to derive package names
    pub base_url: String,
    /// Data-model schemas, in document order
    pub schemas: Vec<Schema>,
    /// API resources, in document order
    pub resources: Vec<Resource>,
}

impl DiscoveryDocument {
    /// Get a schema by its id
    pub fn schema(&self, id: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.id == id)
    }

    /// Get a resource by its name
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }
}

/// A named data-model entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Schema id, which is also the generated type name
    pub id: String,
    pub description: Option<String>,
    pub properties: Vec<Property>,
}

/// A single property of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeRef,
}

/// Type descriptor of a property or parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(Primitive),
    Array(Box<TypeRef>),
    /// Reference to a schema by id
    Reference(String),
}

impl TypeRef {
    pub fn array_of(items: TypeRef) -> Self {
        TypeRef::Array(Box::new(items))
    }

    pub fn reference(id: impl Into<String>) -> Self {
        TypeRef::Reference(id.into())
    }
}

/// Primitive JSON schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Integer,
    Number,
    Boolean,
}

impl Primitive {
    /// Resolve a discovery `type` name. Returns `None` for anything that is not a primitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Primitive::String),
            "integer" => Some(Primitive::Integer),
            "number" => Some(Primitive::Number),
            "boolean" => Some(Primitive::Boolean),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Integer => "integer",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
        }
    }
}

/// A named group of API methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    pub methods: Vec<Method>,
}

/// One callable API operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// HTTP verb (e.g., "GET", "POST")
    pub http_method: String,
    /// URL path template relative to the base URL (e.g., "items/{id}")
    pub path: String,
    pub description: Option<String>,
    pub request: Option<RequestBody>,
    /// Schema id of the response, `None` when the method returns nothing
    pub response: Option<String>,
    /// Declared parameters, in document order
    pub parameters: Vec<Parameter>,
    /// Explicit ordering hint from `parameterOrder`
    pub parameter_order: Vec<String>,
}

impl Method {
    /// Get a declared parameter by name
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Request body of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    /// Schema id of the body
    pub schema: String,
    /// Name of the body parameter in generated signatures
    pub parameter_name: String,
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeRef,
    pub location: Option<Location>,
    pub required: bool,
}

/// Where a parameter is carried in the HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
}

impl Location {
    /// Resolve a discovery `location` value. Unknown locations carry no tag.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "path" => Some(Location::Path),
            "query" => Some(Location::Query),
            _ => None,
        }
    }
}
