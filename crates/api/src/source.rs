use crate::models::FieldValue;
use std::path::Path;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Producer of syntax-tree dumps.
///
/// The compiler frontend that actually builds the tree lives outside this
/// workspace; implementations either read a pre-generated dump or shell out
/// to a frontend of their choice.
pub trait DumpSource: Send + Sync {
    /// Returns the tree for `source_file`. The root is a node or a list of nodes.
    fn load(&self, source_file: &Path) -> Result<FieldValue, BoxError>;
}
