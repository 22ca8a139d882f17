use serde::{Deserialize, Serialize};

/// A line attribution extracted from a node, with the file it names, if any.
///
/// A location without a file is attributed to the analyzed file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Location {
    pub fn new(line: usize) -> Self {
        Self { line, file: None }
    }

    pub fn in_file(line: usize, file: impl Into<String>) -> Self {
        Self {
            line,
            file: Some(file.into()),
        }
    }
}
