//! Package, type and path naming

use crate::error::{Error, Result};
use std::path::PathBuf;
use url::Url;

/// Suffix of the package holding generated models
pub const MODEL_PACKAGE_SUFFIX: &str = "model";

/// Derive the root package name from an API base URL.
///
/// Host labels are reversed and the path segments appended, e.g.
/// `https://www.googleapis.com/mirror/v1/` -> `com.googleapis.www.mirror.v1`.
pub fn package_name(base_url: &str) -> Result<String> {
    let url = Url::parse(base_url)
        .map_err(|e| Error::Parse(format!("invalid baseUrl '{}': {}", base_url, e)))?;

    let host = url
        .host_str()
        .ok_or_else(|| Error::Parse(format!("baseUrl '{}' has no host", base_url)))?;

    let mut parts: Vec<String> = host
        .split('.')
        .rev()
        .filter(|label| !label.is_empty())
        .map(sanitize_identifier)
        .collect();

    if let Some(segments) = url.path_segments() {
        parts.extend(
            segments
                .filter(|segment| !segment.is_empty())
                .map(sanitize_identifier),
        );
    }

    Ok(parts.join("."))
}

/// Package holding the models of a root package
pub fn model_package_name(package: &str) -> String {
    format!("{}.{}", package, MODEL_PACKAGE_SUFFIX)
}

/// Relative source path of a type: package directories plus `<type_name>.<extension>`
pub fn source_path(package: &str, type_name: &str, extension: &str) -> PathBuf {
    let mut path: PathBuf = package.split('.').collect();
    path.push(format!("{}.{}", type_name, extension));
    path
}

/// Interface name of a resource: words split on `_`, each capitalized fully.
///
/// `my_resource` -> `MyResource`, `URL_maps` -> `UrlMaps`.
pub fn resource_type_name(resource: &str) -> String {
    resource.split('_').map(capitalize_fully).collect()
}

/// Uppercase the first letter, lowercase the rest
fn capitalize_fully(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Make a package segment a valid Java identifier
fn sanitize_identifier(segment: &str) -> String {
    let mut ident: String = segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
