use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Lookup from node kind to a short human-readable description.
///
/// Shared read-only between concurrent analyses, hence `Send + Sync`.
pub trait ExplanationTable: Send + Sync {
    fn lookup(&self, kind: &str) -> Option<&str>;

    /// Description for `kind`, falling back to the kind name itself.
    fn explain<'a>(&'a self, kind: &'a str) -> &'a str {
        self.lookup(kind).unwrap_or(kind)
    }
}

impl<S: BuildHasher + Send + Sync> ExplanationTable for HashMap<String, String, S> {
    fn lookup(&self, kind: &str) -> Option<&str> {
        self.get(kind).map(String::as_str)
    }
}

impl ExplanationTable for IndexMap<String, String> {
    fn lookup(&self, kind: &str) -> Option<&str> {
        self.get(kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_falls_back_to_kind_name() {
        let mut table = HashMap::new();
        table.insert("IfStmt".to_string(), "If Statement".to_string());

        assert_eq!(table.explain("IfStmt"), "If Statement");
        assert_eq!(table.explain("GotoStmt"), "GotoStmt");
    }
}
