//! Decoding of JSON syntax-tree dumps and a file-backed [`DumpSource`].

use crate::error::{AstlensError, Result};
use astlens_api::{BoxError, DumpSource, FieldValue};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix of a dump file next to its source, e.g. `main.cpp` -> `main_ast.json`.
pub const DUMP_SUFFIX: &str = "_ast.json";

/// Parses a dump. The root must be a node or a list of nodes.
///
/// Nesting depth is unbounded: the recursion limit is off and the stack
/// grows on demand while decoding.
pub fn parse_dump(text: &str) -> Result<FieldValue> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let root = FieldValue::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    if !root.is_nested() {
        return Err(AstlensError::InvalidDump(
            "root must be a node or a list of nodes, found a scalar".to_string(),
        ));
    }
    Ok(root)
}

pub fn read_dump(path: &Path) -> Result<FieldValue> {
    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes of dump from {}", text.len(), path.display());
    parse_dump(&text)
}

/// Conventional dump file name for `source_file`.
pub fn dump_file_name(source_file: &Path) -> String {
    let stem = source_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("source");
    format!("{stem}{DUMP_SUFFIX}")
}

/// Reads pre-generated dumps from disk.
#[derive(Debug, Clone)]
pub enum FileDumpSource {
    /// Always the same file, whatever source is asked for.
    Fixed(PathBuf),
    /// `<dir>/<stem>_ast.json` for each source file.
    InDir(PathBuf),
    /// `<stem>_ast.json` next to each source file.
    Alongside,
}

impl FileDumpSource {
    pub fn fixed(path: impl Into<PathBuf>) -> Self {
        FileDumpSource::Fixed(path.into())
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        FileDumpSource::InDir(dir.into())
    }

    pub fn dump_path_for(&self, source_file: &Path) -> PathBuf {
        match self {
            FileDumpSource::Fixed(path) => path.clone(),
            FileDumpSource::InDir(dir) => dir.join(dump_file_name(source_file)),
            FileDumpSource::Alongside => source_file
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(dump_file_name(source_file)),
        }
    }
}

impl DumpSource for FileDumpSource {
    fn load(&self, source_file: &Path) -> std::result::Result<FieldValue, BoxError> {
        let path = self.dump_path_for(source_file);
        read_dump(&path).map_err(|e| {
            let boxed: BoxError = format!("{}: {}", path.display(), e).into();
            boxed
        })
    }
}
