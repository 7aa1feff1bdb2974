//! Code generators
//!
//! Each target implements the `Generator` trait over a parsed discovery document.

pub mod java;

use crate::class_map::ClassMap;
use crate::error::Result;
use crate::ir::DiscoveryDocument;
use std::path::PathBuf;

/// Trait that all generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate code from a discovery document
    fn generate(&self, document: &DiscoveryDocument) -> Result<Self::Output>;
}

/// Call shape of a generated interface member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodType {
    /// Returns the response directly
    Sync,
    /// Delivers the response through a trailing callback parameter
    Async,
}

/// Non-empty set of method types to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodTypes {
    sync: bool,
    async_: bool,
}

impl MethodTypes {
    pub const BOTH: MethodTypes = MethodTypes {
        sync: true,
        async_: true,
    };

    /// Build a set from flags. An empty selection means both.
    pub fn new(sync: bool, async_: bool) -> Self {
        if !sync && !async_ {
            Self::BOTH
        } else {
            Self { sync, async_ }
        }
    }

    pub fn only(method_type: MethodType) -> Self {
        match method_type {
            MethodType::Sync => Self::new(true, false),
            MethodType::Async => Self::new(false, true),
        }
    }

    /// Parse a comma-separated selector of `sync`, `async` and `both`.
    ///
    /// Unrecognized tokens are ignored; an empty selection means both.
    pub fn from_selector(selector: &str) -> Self {
        let mut sync = false;
        let mut async_ = false;
        for token in selector.split(',') {
            match token {
                "sync" => sync = true,
                "async" => async_ = true,
                "both" => {
                    sync = true;
                    async_ = true;
                }
                _ => {}
            }
        }
        Self::new(sync, async_)
    }

    pub fn contains(&self, method_type: MethodType) -> bool {
        match method_type {
            MethodType::Sync => self.sync,
            MethodType::Async => self.async_,
        }
    }
}

impl Default for MethodTypes {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Configuration options for code generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Which interface member shapes to generate
    pub method_types: MethodTypes,
    /// Field type overrides for models
    pub class_map: Option<ClassMap>,
    /// Whether to emit documentation comments from descriptions
    pub generate_docs: bool,
    /// Reference models by bare name in interfaces, relying on the wildcard
    /// import. Names equal to the interface's own name stay qualified.
    pub bare_model_references: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            method_types: MethodTypes::BOTH,
            class_map: None,
            generate_docs: false,
            bare_model_references: false,
        }
    }
}

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub contents: String,
}

/// Output of a generator, in generation order
#[derive(Debug, Clone, Default)]
pub struct GeneratedSources {
    pub files: Vec<GeneratedFile>,
}

impl GeneratedSources {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find a generated file by its relative path
    pub fn get(&self, path: impl Into<PathBuf>) -> Option<&GeneratedFile> {
        let path = path.into();
        self.files.iter().find(|f| f.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_tokens() {
        assert_eq!(MethodTypes::from_selector("sync"), MethodTypes::only(MethodType::Sync));
        assert_eq!(MethodTypes::from_selector("async"), MethodTypes::only(MethodType::Async));
        assert_eq!(MethodTypes::from_selector("both"), MethodTypes::BOTH);
        assert_eq!(MethodTypes::from_selector("sync,async"), MethodTypes::BOTH);
    }

    #[test]
    fn test_selector_ignores_unknown_tokens() {
        assert_eq!(
            MethodTypes::from_selector("blocking,sync"),
            MethodTypes::only(MethodType::Sync)
        );
        assert_eq!(MethodTypes::from_selector("rx"), MethodTypes::BOTH);
    }

    #[test]
    fn test_empty_selection_means_both() {
        assert_eq!(MethodTypes::from_selector(""), MethodTypes::BOTH);
        assert_eq!(MethodTypes::new(false, false), MethodTypes::BOTH);
        assert_eq!(MethodTypes::default(), MethodTypes::BOTH);
    }

    #[test]
    fn test_contains() {
        let sync = MethodTypes::only(MethodType::Sync);
        assert!(sync.contains(MethodType::Sync));
        assert!(!sync.contains(MethodType::Async));
    }
}
