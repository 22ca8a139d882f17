use super::analysis::IndexStatistics;
use indexmap::IndexMap;
use std::collections::BTreeMap;

const MOST_COMMON_LIMIT: usize = 10;

/// Distinct node kinds observed at one line, in first-insertion order.
///
/// Each kind carries the label of the first node that contributed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineKinds {
    entries: IndexMap<String, Option<String>>,
}

impl LineKinds {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Kinds paired with their label.
    pub fn labeled(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(kind, label)| (kind.as_str(), label.as_deref()))
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    pub fn label(&self, kind: &str) -> Option<&str> {
        self.entries.get(kind).and_then(|l| l.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kinds joined with `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.iter().collect::<Vec<_>>().join(sep)
    }
}

/// Mapping from 1-based line number to the kinds that originate there.
///
/// Populated once by a tree walk and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    lines: BTreeMap<usize, LineKinds>,
}

impl LineIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `kind` at `line`. Returns false if it was already present.
    pub fn add(&mut self, line: usize, kind: &str) -> bool {
        self.add_labeled(line, kind, None)
    }

    /// Like [`LineIndex::add`]; the label is kept only on first insertion.
    pub fn add_labeled(&mut self, line: usize, kind: &str, label: Option<String>) -> bool {
        let entry = self.lines.entry(line).or_default();
        if entry.entries.contains_key(kind) {
            return false;
        }
        entry.entries.insert(kind.to_string(), label);
        true
    }

    /// Kinds at `line` in first-insertion order; empty when none were recorded.
    pub fn get(&self, line: usize) -> Vec<&str> {
        self.line(line).map(|k| k.iter().collect()).unwrap_or_default()
    }

    pub fn line(&self, line: usize) -> Option<&LineKinds> {
        self.lines.get(&line).filter(|k| !k.is_empty())
    }

    pub fn contains(&self, line: usize, kind: &str) -> bool {
        self.line(line).is_some_and(|k| k.contains(kind))
    }

    /// Populated line numbers in ascending order.
    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|(line, _)| line)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &LineKinds)> {
        self.lines
            .iter()
            .filter(|(_, kinds)| !kinds.is_empty())
            .map(|(line, kinds)| (*line, kinds))
    }

    /// Number of populated lines.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of distinct kinds over all lines.
    pub fn annotation_count(&self) -> usize {
        self.lines.values().map(LineKinds::len).sum()
    }

    pub fn statistics(&self) -> IndexStatistics {
        let total_lines_with_ast = self.len();
        let total_ast_nodes = self.annotation_count();

        let mut node_type_counts: IndexMap<String, usize> = IndexMap::new();
        for (_, kinds) in self.iter() {
            for kind in kinds.iter() {
                *node_type_counts.entry(kind.to_string()).or_default() += 1;
            }
        }

        let mut most_common: Vec<(String, usize)> = node_type_counts
            .iter()
            .map(|(kind, count)| (kind.clone(), *count))
            .collect();
        // Stable sort keeps first-appearance order among equal counts.
        most_common.sort_by(|a, b| b.1.cmp(&a.1));
        most_common.truncate(MOST_COMMON_LIMIT);

        IndexStatistics {
            total_lines_with_ast,
            total_ast_nodes,
            avg_nodes_per_line: if total_lines_with_ast > 0 {
                total_ast_nodes as f64 / total_lines_with_ast as f64
            } else {
                0.0
            },
            node_type_counts,
            most_common,
        }
    }
}
