use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::render::{OutputFormat, RenderContext};
use crate::walker::TreeWalker;
use astlens_api::{AnalysisResult, ExplanationTable, FieldValue};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Walks dumps into line indexes and renders them.
///
/// Holds no per-analysis state; one instance may serve many analyses,
/// including concurrent ones.
#[derive(Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    explanations: Option<Arc<dyn ExplanationTable>>,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            explanations: None,
        }
    }

    pub fn with_explanations(mut self, table: Arc<dyn ExplanationTable>) -> Self {
        self.explanations = Some(table);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The table handed to renderers; `None` unless explanations are enabled.
    pub fn explanations(&self) -> Option<&dyn ExplanationTable> {
        if !self.config.include_explanations {
            return None;
        }
        self.explanations.as_deref()
    }

    pub fn analyze(&self, root: &FieldValue, target: &Path, source_text: &str) -> AnalysisResult {
        self.analyze_lines(root, target, split_source_lines(source_text))
    }

    pub fn analyze_lines(
        &self,
        root: &FieldValue,
        target: &Path,
        source_lines: Vec<String>,
    ) -> AnalysisResult {
        let walker = TreeWalker::new(target, self.config.filter_profile);
        let (index, stats) = walker.walk_with_stats(root);
        let result = AnalysisResult::new(index, source_lines);
        info!(
            "Analyzed {} ({} profile): {} annotated lines, {} annotations from {} nodes",
            target.display(),
            self.config.filter_profile,
            result.total_annotated_lines,
            result.total_annotation_count,
            stats.nodes_visited
        );
        result
    }

    pub fn render(
        &self,
        result: &AnalysisResult,
        format: OutputFormat,
        source_name: Option<&str>,
    ) -> Result<String> {
        let ctx = RenderContext::from_result(result)
            .with_explanations(self.explanations())
            .with_source_name(source_name);
        format.render(&ctx)
    }
}

/// Splits on `\n` and `\r\n`. Empty text has no lines.
pub fn split_source_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
