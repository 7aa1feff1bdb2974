use crate::error::{Error, Result};
use crate::generators::GeneratedSources;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Write generated sources below the given output directory.
/// Parent directories are created as needed.
///
/// Files are written one at a time in generation order. Two files resolving to
/// the same path fail on the second write; files written before a failure stay
/// on disk.
pub fn write_sources(output_dir: &Path, sources: &GeneratedSources) -> Result<()> {
    let mut written = HashSet::with_capacity(sources.len());

    for file in &sources.files {
        let path = output_dir.join(&file.path);

        if !written.insert(path.clone()) {
            return Err(Error::io(
                &path,
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "another generated file was already written to this path",
                ),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&path, &file.contents).map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), bytes = file.contents.len(), "wrote generated file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratedFile;
    use std::path::PathBuf;

    fn file(path: &str, contents: &str) -> GeneratedFile {
        GeneratedFile {
            path: PathBuf::from(path),
            contents: contents.to_string(),
        }
    }

    #[test]
    fn test_writes_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let sources = GeneratedSources {
            files: vec![
                file("com/example/model/Item.java", "class Item {}"),
                file("com/example/Items.java", "interface Items {}"),
            ],
        };

        write_sources(dir.path(), &sources).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("com/example/model/Item.java")).unwrap(),
            "class Item {}"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("com/example/Items.java")).unwrap(),
            "interface Items {}"
        );
    }

    #[test]
    fn test_path_collision_keeps_first_file() {
        let dir = tempfile::tempdir().unwrap();
        let sources = GeneratedSources {
            files: vec![
                file("com/example/Items.java", "first"),
                file("com/example/Items.java", "second"),
            ],
        };

        let err = write_sources(dir.path(), &sources).unwrap_err();
        match err {
            Error::Io { path, source } => {
                assert_eq!(path, dir.path().join("com/example/Items.java"));
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(dir.path().join("com/example/Items.java")).unwrap(),
            "first"
        );
    }

    #[test]
    fn test_empty_sources_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path(), &GeneratedSources::default()).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
