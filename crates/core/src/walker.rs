//! Pre-order traversal of a syntax-tree dump into a [`LineIndex`].
//!
//! Descent is shape-driven: every field holding a record or a list is
//! visited, with the primary child fields (`inner`, `children`) first. The
//! input is assumed to be a tree; cyclic input is not defended against.

use crate::filter;
use crate::label::node_label;
use crate::resolver::{self, TargetFile};
use astlens_api::{FieldValue, FilterProfile, LineIndex, PRIMARY_CHILD_FIELDS, SyntaxNode};
use std::path::Path;
use tracing::debug;

/// Counters collected during one walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Records carrying a `kind`.
    pub nodes_visited: usize,
    pub locations_seen: usize,
    /// Locations attributed to some other file.
    pub foreign_locations: usize,
    /// Nodes with locations whose kind the profile dropped.
    pub filtered_nodes: usize,
    pub recorded: usize,
}

pub struct TreeWalker {
    target: TargetFile,
    profile: FilterProfile,
}

impl TreeWalker {
    pub fn new(target: impl AsRef<Path>, profile: FilterProfile) -> Self {
        Self {
            target: TargetFile::new(target),
            profile,
        }
    }

    pub fn target(&self) -> &TargetFile {
        &self.target
    }

    pub fn profile(&self) -> FilterProfile {
        self.profile
    }

    pub fn walk(&self, root: &FieldValue) -> LineIndex {
        self.walk_with_stats(root).0
    }

    pub fn walk_with_stats(&self, root: &FieldValue) -> (LineIndex, WalkStats) {
        let mut index = LineIndex::new();
        let mut stats = WalkStats::default();

        // Dump depth is unbounded; no recursion here.
        let mut stack: Vec<&FieldValue> = vec![root];
        while let Some(value) = stack.pop() {
            match value {
                FieldValue::Node(node) => {
                    self.visit(node, &mut index, &mut stats);
                    let first = stack.len();
                    push_children(node, &mut stack);
                    stack[first..].reverse();
                }
                FieldValue::List(items) => {
                    stack.extend(items.iter().rev().filter(|v| v.is_nested()));
                }
                _ => {}
            }
        }

        debug!(
            "Walked {} nodes for {}: {} locations, {} foreign, {} filtered, {} recorded",
            stats.nodes_visited,
            self.target.path().display(),
            stats.locations_seen,
            stats.foreign_locations,
            stats.filtered_nodes,
            stats.recorded
        );
        (index, stats)
    }

    fn visit(&self, node: &SyntaxNode, index: &mut LineIndex, stats: &mut WalkStats) {
        let Some(kind) = node.kind() else {
            return;
        };
        stats.nodes_visited += 1;

        let locations = resolver::resolve(node);
        if locations.is_empty() {
            return;
        }
        stats.locations_seen += locations.len();

        if !filter::include(kind, self.profile) {
            stats.filtered_nodes += 1;
            return;
        }

        let mut cached_label = None;
        for location in &locations {
            if !self.target.contains(location) {
                stats.foreign_locations += 1;
                continue;
            }
            if index.contains(location.line, kind) {
                continue;
            }
            let label = cached_label.get_or_insert_with(|| node_label(node));
            if index.add_labeled(location.line, kind, label.clone()) {
                stats.recorded += 1;
            }
        }
    }
}

/// Nested values of `node` in visiting order: primary child fields, then the rest.
fn push_children<'a>(node: &'a SyntaxNode, out: &mut Vec<&'a FieldValue>) {
    for name in PRIMARY_CHILD_FIELDS {
        if let Some(value) = node.get(name).filter(|v| v.is_nested()) {
            out.push(value);
        }
    }
    out.extend(
        node.fields()
            .filter(|(name, value)| !PRIMARY_CHILD_FIELDS.contains(name) && value.is_nested())
            .map(|(_, value)| value),
    );
}

/// Walks `root` for `target` under `profile`.
pub fn walk(root: &FieldValue, target: impl AsRef<Path>, profile: FilterProfile) -> LineIndex {
    TreeWalker::new(target, profile).walk(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> FieldValue {
        FieldValue::from(value)
    }

    #[test]
    fn parent_is_recorded_before_children() {
        let root = tree(json!({
            "kind": "DeclStmt",
            "loc": {"line": 5},
            "inner": [ {"kind": "VarDecl", "loc": {"line": 5}} ]
        }));
        let index = walk(&root, "a.cpp", FilterProfile::All);
        assert_eq!(index.get(5), vec!["DeclStmt", "VarDecl"]);
    }

    #[test]
    fn primary_children_come_before_other_nested_fields() {
        let root = tree(json!({
            "kind": "IfStmt",
            "loc": {"line": 1},
            "cond": {"kind": "BinaryOperator", "loc": {"line": 1}},
            "inner": [ {"kind": "CompoundStmt", "loc": {"line": 1}} ]
        }));
        let index = walk(&root, "a.cpp", FilterProfile::All);
        assert_eq!(index.get(1), vec!["IfStmt", "CompoundStmt", "BinaryOperator"]);
    }

    #[test]
    fn list_root_and_non_child_fields_are_walked() {
        let root = tree(json!([
            {"kind": "FunctionDecl", "loc": {"line": 1}},
            {"kind": "LambdaExpr", "loc": {"line": 2},
             "body": {"kind": "ReturnStmt", "loc": {"line": 3}}},
            "stray scalar",
            42
        ]));
        let index = walk(&root, "a.cpp", FilterProfile::All);
        assert_eq!(index.get(1), vec!["FunctionDecl"]);
        assert_eq!(index.get(2), vec!["LambdaExpr"]);
        assert_eq!(index.get(3), vec!["ReturnStmt"]);
    }

    #[test]
    fn foreign_locations_are_dropped() {
        let root = tree(json!({
            "kind": "TranslationUnitDecl",
            "inner": [
                {"kind": "TypedefDecl", "loc": {"line": 40, "file": "/usr/include/stdio.h"}},
                {"kind": "FunctionDecl", "loc": {"line": 2, "file": "/src/main.cpp"}},
                {"kind": "VarDecl", "loc": {"line": 3}}
            ]
        }));
        let (index, stats) =
            TreeWalker::new("/src/main.cpp", FilterProfile::All).walk_with_stats(&root);
        assert!(index.get(40).is_empty());
        assert_eq!(index.get(2), vec!["FunctionDecl"]);
        assert_eq!(index.get(3), vec!["VarDecl"]);
        assert_eq!(stats.foreign_locations, 1);
        assert_eq!(stats.recorded, 2);
    }

    #[test]
    fn labels_come_from_first_contributing_node() {
        let root = tree(json!({
            "kind": "CompoundStmt",
            "inner": [
                {"kind": "DeclRefExpr", "loc": {"line": 4}, "name": "x"},
                {"kind": "DeclRefExpr", "loc": {"line": 4}, "name": "y"}
            ]
        }));
        let index = walk(&root, "a.cpp", FilterProfile::All);
        assert_eq!(index.line(4).and_then(|k| k.label("DeclRefExpr")), Some("x"));
    }

    #[test]
    fn deep_trees_do_not_overflow() {
        let mut node = SyntaxNode::of_kind("IntegerLiteral")
            .with("loc", SyntaxNode::new().with("line", 1i64));
        for _ in 0..100_000 {
            node = SyntaxNode::of_kind("ParenExpr").with("inner", vec![node]);
        }
        let root = FieldValue::Node(node);
        let index = walk(&root, "a.cpp", FilterProfile::All);
        assert_eq!(index.get(1), vec!["IntegerLiteral"]);
    }
}
