//! Location extraction and file attribution.
//!
//! A node may carry a point location (`loc`) and a range (`range.begin` /
//! `range.end`). Each sub-record that holds a usable `line` yields one
//! [`Location`]. Sub-records of the wrong shape are skipped, never reported.

use astlens_api::{FieldValue, Location, SyntaxNode};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use tracing::trace;

pub const POINT_FIELD: &str = "loc";
pub const RANGE_FIELD: &str = "range";

const LINE_FIELD: &str = "line";
const FILE_FIELD: &str = "file";
/// Alternate point shape: `loc: { start: { line, file } }`.
const START_FIELD: &str = "start";
const BEGIN_FIELD: &str = "begin";
const END_FIELD: &str = "end";

/// Extracts the candidate locations of `node`, point location first.
pub fn resolve(node: &SyntaxNode) -> Vec<Location> {
    let mut locations = Vec::with_capacity(3);
    if let Some(point) = point_location(node) {
        locations.push(point);
    }
    range_locations(node, &mut locations);
    locations
}

fn point_location(node: &SyntaxNode) -> Option<Location> {
    let loc = match node.get(POINT_FIELD)? {
        FieldValue::Node(loc) => loc,
        other => {
            trace!("Skipping non-record point location: {:?}", other);
            return None;
        }
    };

    if loc.get(LINE_FIELD).is_some() {
        return location_from(loc);
    }
    loc.get_node(START_FIELD).and_then(location_from)
}

fn range_locations(node: &SyntaxNode, out: &mut Vec<Location>) {
    let range = match node.get(RANGE_FIELD) {
        Some(FieldValue::Node(range)) => range,
        Some(other) => {
            trace!("Skipping non-record range: {:?}", other);
            return;
        }
        None => return,
    };

    let begin = range.get_node(BEGIN_FIELD);
    if let Some(location) = begin.and_then(location_from) {
        out.push(location);
    }

    if let Some(end) = range.get_node(END_FIELD) {
        if begin == Some(end) {
            return;
        }
        if let Some(location) = location_from(end) {
            out.push(location);
        }
    }
}

/// Builds a location from a `{line, file?}` record.
fn location_from(record: &SyntaxNode) -> Option<Location> {
    let line = match record.get(LINE_FIELD)? {
        FieldValue::Integer(line) if *line >= 1 => usize::try_from(*line).ok()?,
        other => {
            trace!("Skipping location with unusable line: {:?}", other);
            return None;
        }
    };

    let file = match record.get(FILE_FIELD) {
        None | Some(FieldValue::Null) => None,
        Some(FieldValue::Text(file)) if file.is_empty() => None,
        Some(FieldValue::Text(file)) => Some(file.clone()),
        Some(other) => {
            trace!("Skipping location with non-string file: {:?}", other);
            return None;
        }
    };

    Some(Location { line, file })
}

/// The file under analysis, pre-normalized for repeated membership checks.
#[derive(Debug, Clone)]
pub struct TargetFile {
    path: PathBuf,
    absolute: Option<PathBuf>,
    file_name: Option<OsString>,
}

impl TargetFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let absolute = std::path::absolute(path)
            .ok()
            .map(|abs| normalize_lexically(&abs));
        Self {
            path: path.to_path_buf(),
            absolute,
            file_name: path.file_name().map(ToOwned::to_owned),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `location` is attributed to this file.
    pub fn contains(&self, location: &Location) -> bool {
        match location.file.as_deref() {
            None => Self::default_include(),
            Some(file) => self.matches_file(file),
        }
    }

    /// A location that names no file belongs to the analyzed file.
    fn default_include() -> bool {
        true
    }

    /// Absolute candidates compare by normalized absolute path; relative ones
    /// (and any candidate when the target cannot be made absolute) by basename.
    /// Basename matching accepts a same-named file from another directory.
    fn matches_file(&self, file: &str) -> bool {
        let candidate = Path::new(file);
        if candidate.is_absolute() {
            if let Some(target) = &self.absolute {
                return normalize_lexically(candidate) == *target;
            }
        }
        match (candidate.file_name(), &self.file_name) {
            (Some(candidate), Some(target)) => candidate == target.as_os_str(),
            _ => false,
        }
    }
}

/// Membership check for a single location; see [`TargetFile::contains`].
pub fn belongs_to_target(location: &Location, target: impl AsRef<Path>) -> bool {
    TargetFile::new(target).contains(location)
}

/// Removes `.` and folds `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
