//! Discovery Document Code Generator
//!
//! This library turns an API discovery document into Java sources: one model
//! class per schema and one Retrofit interface per resource.
//!
//! ## Architecture
//!
//! The generator uses a three-stage pipeline:
//! 1. **Parser**: Reads the discovery document JSON
//! 2. **IR (Intermediate Representation)**: Immutable schemas, resources and methods
//!    with typed descriptors
//! 3. **Generators**: Target-specific code generation from the IR
//!
//! Generated sources are written with [`utils::write_sources`].

pub mod class_map;
pub mod error;
pub mod generators;
pub mod ir;
pub mod naming;
pub mod ordering;
pub mod parser;
pub mod utils;

use std::fs;
use std::path::Path;

pub use class_map::ClassMap;
pub use error::{Error, Result};
use generators::java::RetrofitGenerator;
pub use generators::{GeneratorConfig, MethodType, MethodTypes};
use ir::DiscoveryDocument;
use tracing::info;

/// Main entry point for code generation
pub struct CodeGenerator {
    document: DiscoveryDocument,
}

impl CodeGenerator {
    /// Create a new code generator from discovery document JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let document = parser::parse_document(json)?;
        Ok(Self { document })
    }

    /// Create a new code generator from a discovery document file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    /// Get the parsed document
    pub fn document(&self) -> &DiscoveryDocument {
        &self.document
    }

    /// Generate code with the given generator
    pub fn generate<G: generators::Generator>(&self, generator: G) -> Result<G::Output> {
        generator.generate(&self.document)
    }
}

/// Convenience helper to run the Retrofit generator on a discovery document file.
///
/// Returns the number of generated files.
pub fn generate_retrofit_from_path(
    discovery_path: &Path,
    output_dir: &Path,
    config: GeneratorConfig,
) -> Result<usize> {
    let codegen = CodeGenerator::from_path(discovery_path)?;

    info!(
        discovery = %discovery_path.display(),
        base_url = %codegen.document().base_url,
        schemas = codegen.document().schemas.len(),
        resources = codegen.document().resources.len(),
        "Parsed discovery document"
    );

    let output = codegen.generate(RetrofitGenerator::new(config))?;
    utils::write_sources(output_dir, &output)?;

    info!(
        files = output.len(),
        output_dir = %output_dir.display(),
        "Generated sources"
    );

    Ok(output.len())
}
