//! Java code generator producing Retrofit interfaces and model classes

mod interface;
mod model;
mod types;
mod writer;

pub use interface::InterfaceEmitter;
pub use model::ModelEmitter;
pub use types::{boxed_type, primitive_type, TypeMapper};
pub use writer::JavaWriter;

use crate::error::Result;
use crate::generators::{GeneratedFile, GeneratedSources, Generator, GeneratorConfig};
use crate::ir::DiscoveryDocument;
use crate::naming;
use tracing::debug;

/// File extension of generated sources
pub const JAVA_EXTENSION: &str = "java";

/// Retrofit code generator
pub struct RetrofitGenerator {
    config: GeneratorConfig,
}

impl RetrofitGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator for RetrofitGenerator {
    type Output = GeneratedSources;

    fn generate(&self, document: &DiscoveryDocument) -> Result<Self::Output> {
        let package = naming::package_name(&document.base_url)?;
        let model_package = naming::model_package_name(&package);
        let mut files = Vec::with_capacity(document.schemas.len() + document.resources.len());

        // Models live in the model package, so references stay unqualified
        let model_mapper = TypeMapper::unqualified();
        let models = ModelEmitter {
            package: &model_package,
            mapper: &model_mapper,
            class_map: self.config.class_map.as_ref(),
            generate_docs: self.config.generate_docs,
        };

        for schema in &document.schemas {
            let path = naming::source_path(&model_package, &schema.id, JAVA_EXTENSION);
            debug!(schema = %schema.id, path = %path.display(), "generating model");
            files.push(GeneratedFile {
                path,
                contents: models.emit(schema),
            });
        }

        let qualified_mapper = TypeMapper::qualified(model_package.as_str());

        for resource in &document.resources {
            let type_name = naming::resource_type_name(&resource.name);
            let path = naming::source_path(&package, &type_name, JAVA_EXTENSION);
            debug!(resource = %resource.name, path = %path.display(), "generating interface");

            // A bare model name equal to the interface name would bind to the interface
            let bare_mapper;
            let mapper = if self.config.bare_model_references {
                bare_mapper = TypeMapper::shadowing(model_package.as_str(), [type_name.as_str()]);
                &bare_mapper
            } else {
                &qualified_mapper
            };
            let interfaces = InterfaceEmitter {
                package: &package,
                model_package: &model_package,
                mapper,
                method_types: self.config.method_types,
                generate_docs: self.config.generate_docs,
            };

            files.push(GeneratedFile {
                path,
                contents: interfaces.emit(resource, &type_name)?,
            });
        }

        Ok(GeneratedSources { files })
    }
}
