use super::index::LineIndex;
use indexmap::IndexMap;
use serde::Serialize;

/// Handoff from the walker to the renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub line_index: LineIndex,
    /// Raw source lines; element `i` is line `i + 1`.
    pub source_lines: Vec<String>,
    pub total_annotated_lines: usize,
    pub total_annotation_count: usize,
}

impl AnalysisResult {
    pub fn new(line_index: LineIndex, source_lines: Vec<String>) -> Self {
        let total_annotated_lines = line_index.len();
        let total_annotation_count = line_index.annotation_count();
        Self {
            line_index,
            source_lines,
            total_annotated_lines,
            total_annotation_count,
        }
    }

    pub fn statistics(&self) -> IndexStatistics {
        self.line_index.statistics()
    }
}

/// Summary counts over a [`LineIndex`].
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct IndexStatistics {
    pub total_lines_with_ast: usize,
    pub total_ast_nodes: usize,
    pub avg_nodes_per_line: f64,
    /// Lines per kind, ordered by first appearance.
    pub node_type_counts: IndexMap<String, usize>,
    /// Up to ten kinds with the highest counts.
    pub most_common: Vec<(String, usize)>,
}
