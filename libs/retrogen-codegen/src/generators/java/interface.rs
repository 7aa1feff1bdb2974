//! Retrofit interface generation

use super::types::TypeMapper;
use super::writer::JavaWriter;
use crate::error::Result;
use crate::generators::{MethodType, MethodTypes};
use crate::ir::{Location, Method, Parameter, Resource};
use crate::ordering::order_parameters;

const RETROFIT_IMPORTS: &[&str] = &[
    "retrofit.Callback",
    "retrofit.http.GET",
    "retrofit.http.POST",
    "retrofit.http.PUT",
    "retrofit.http.PATCH",
    "retrofit.http.DELETE",
    "retrofit.http.HEAD",
    "retrofit.http.Body",
    "retrofit.http.Path",
    "retrofit.http.Query",
];

/// Emits one Retrofit interface per resource
pub struct InterfaceEmitter<'a> {
    pub package: &'a str,
    pub model_package: &'a str,
    pub mapper: &'a TypeMapper,
    pub method_types: MethodTypes,
    pub generate_docs: bool,
}

impl InterfaceEmitter<'_> {
    /// Generate the source of a resource's interface named `type_name`
    pub fn emit(&self, resource: &Resource, type_name: &str) -> Result<String> {
        let mut writer = JavaWriter::new();

        writer
            .emit_package(self.package)
            .emit_imports([format!("{}.*", self.model_package)])
            .emit_empty_line()
            .emit_imports(RETROFIT_IMPORTS)
            .emit_empty_line()
            .begin_type("interface", type_name);

        for method in &resource.methods {
            self.emit_method(&mut writer, method)?;
        }

        writer.end_type();
        Ok(writer.finish())
    }

    fn emit_method(&self, writer: &mut JavaWriter, method: &Method) -> Result<()> {
        let mut parameters = Vec::new();
        if let Some(request) = &method.request {
            parameters.push(format!(
                "@Body {} {}",
                self.mapper.reference(&request.schema),
                request.parameter_name
            ));
        }
        for parameter in order_parameters(method)? {
            parameters.push(self.parameter(parameter));
        }

        let response = method.response.as_deref().map(|id| self.mapper.reference(id));
        let route = format!("\"/{}\"", method.path);

        if self.method_types.contains(MethodType::Sync) {
            self.emit_docs(writer, method);
            writer
                .emit_annotation(&method.http_method, &route)
                .emit_method_signature(
                    response.as_deref().unwrap_or("void"),
                    &method.name,
                    &parameters,
                );
        }

        if self.method_types.contains(MethodType::Async) {
            let mut async_parameters = parameters.clone();
            async_parameters.push(format!(
                "Callback<{}> cb",
                response.as_deref().unwrap_or("Void")
            ));

            self.emit_docs(writer, method);
            writer
                .emit_annotation(&method.http_method, &route)
                .emit_method_signature("void", &method.name, &async_parameters);
        }

        Ok(())
    }

    fn emit_docs(&self, writer: &mut JavaWriter, method: &Method) {
        if !self.generate_docs {
            return;
        }
        if let Some(description) = &method.description {
            writer.emit_javadoc(description);
        }
    }

    /// `@Path("name") Type name`, `@Query("name") Type name` or `Type name`
    fn parameter(&self, parameter: &Parameter) -> String {
        let annotation = match parameter.location {
            Some(Location::Path) => format!("@Path(\"{}\") ", parameter.name),
            Some(Location::Query) => format!("@Query(\"{}\") ", parameter.name),
            None => String::new(),
        };
        format!(
            "{}{} {}",
            annotation,
            self.mapper
                .map_parameter(&parameter.type_ref, parameter.required),
            parameter.name
        )
    }
}
