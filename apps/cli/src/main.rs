//! retrogen - Retrofit interface generator
//!
//! Reads a discovery document and writes Java model classes and Retrofit
//! interfaces below an output directory.

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use retrogen_codegen::{generate_retrofit_from_path, ClassMap, GeneratorConfig, MethodTypes};

#[derive(Debug, Parser)]
#[command(
    name = "retrogen",
    version,
    about = "Generate Retrofit interfaces and models from a discovery document"
)]
struct Cli {
    /// Discovery document (JSON)
    discovery: PathBuf,

    /// Directory that receives the generated sources
    output_dir: PathBuf,

    /// Map fields to classes. Format: field_name<TAB>class_name
    #[arg(long = "classmap", value_name = "FILE")]
    class_map: Option<PathBuf>,

    /// Methods to generate, either sync or async (comma separated). Default is to generate both.
    #[arg(long, value_name = "sync,async,both")]
    methods: Option<String>,

    /// Emit Javadoc comments from descriptions
    #[arg(long)]
    docs: bool,

    /// Reference models by bare name in interfaces instead of fully-qualified
    #[arg(long)]
    bare_models: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let class_map = match &self.class_map {
            Some(path) => Some(
                ClassMap::load(path)
                    .with_context(|| format!("reading class map {}", path.display()))?,
            ),
            None => None,
        };

        Ok(GeneratorConfig {
            method_types: self
                .methods
                .as_deref()
                .map(MethodTypes::from_selector)
                .unwrap_or_default(),
            class_map,
            generate_docs: self.docs,
            bare_model_references: self.bare_models,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.generator_config()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        method_types = ?config.method_types,
        class_map_entries = config.class_map.as_ref().map_or(0, ClassMap::len),
        "Starting generation"
    );

    let count = generate_retrofit_from_path(&cli.discovery, &cli.output_dir, config)
        .with_context(|| format!("generating sources from {}", cli.discovery.display()))?;

    tracing::info!(files = count, "Done");

    Ok(())
}
