use astlens_api::{AnalysisResult, DumpSource};
use astlens_core::dump::read_dump;
use astlens_core::explain::BuiltinExplanations;
use astlens_core::{AnalysisConfig, Analyzer, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

/// Bootstraps an analyzer with the built-in explanation table attached.
///
/// Explanations are only rendered when `config.include_explanations` is set.
pub fn build_default_analyzer(config: AnalysisConfig) -> Analyzer {
    Analyzer::new(config).with_explanations(Arc::new(BuiltinExplanations::new()))
}

/// Reads the dump at `dump` and the source at `source`, then analyzes `source`.
pub fn analyze_path(analyzer: &Analyzer, dump: &Path, source: &Path) -> Result<AnalysisResult> {
    let root = read_dump(dump)?;
    let text = fs::read_to_string(source)?;
    Ok(analyzer.analyze(&root, source, &text))
}

/// Like [`analyze_path`], with the dump supplied by `dumps`.
pub fn analyze_with(
    analyzer: &Analyzer,
    dumps: &dyn DumpSource,
    source: &Path,
) -> Result<AnalysisResult> {
    let root = dumps.load(source)?;
    let text = fs::read_to_string(source)?;
    Ok(analyzer.analyze(&root, source, &text))
}

/// One file to analyze in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisJob {
    pub dump: PathBuf,
    pub source: PathBuf,
}

impl AnalysisJob {
    pub fn new(dump: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self {
            dump: dump.into(),
            source: source.into(),
        }
    }
}

/// Analyzes independent files in parallel. Results come back in job order;
/// a failing job does not affect the others.
pub fn analyze_batch(analyzer: &Analyzer, jobs: &[AnalysisJob]) -> Vec<Result<AnalysisResult>> {
    let results: Vec<Result<AnalysisResult>> = jobs
        .par_iter()
        .map(|job| {
            analyze_path(analyzer, &job.dump, &job.source).inspect_err(|e| {
                warn!("Analysis of {} failed: {}", job.source.display(), e);
            })
        })
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        "Batch finished: {} jobs, {} succeeded, {} failed",
        jobs.len(),
        jobs.len() - failed,
        failed
    );
    results
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str) -> WorkerGuard {
    astlens_core::logging::init_logging(component, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astlens_core::OutputFormat;
    use astlens_core::dump::FileDumpSource;
    use serde_json::json;
    use tempfile::tempdir;

    fn write_pair(dir: &Path, stem: &str, return_line: usize, lines: usize) -> AnalysisJob {
        let source = dir.join(format!("{stem}.cpp"));
        let dump = dir.join(format!("{stem}_ast.json"));
        let text: String = (1..=lines).map(|n| format!("// line {n}\n")).collect();
        fs::write(&source, text).unwrap();
        let tree = json!({
            "kind": "TranslationUnitDecl",
            "inner": [{"kind": "ReturnStmt", "loc": {"line": return_line}}]
        });
        fs::write(&dump, tree.to_string()).unwrap();
        AnalysisJob::new(dump, source)
    }

    #[test]
    fn default_analyzer_explains_when_enabled() {
        let dir = tempdir().unwrap();
        let job = write_pair(dir.path(), "one", 2, 3);

        let analyzer = build_default_analyzer(AnalysisConfig::default().with_explanations(true));
        let result = analyze_path(&analyzer, &job.dump, &job.source).unwrap();
        assert_eq!(result.line_index.get(2), vec!["ReturnStmt"]);

        let out = analyzer
            .render(&result, OutputFormat::Annotated, Some("one.cpp"))
            .unwrap();
        assert!(out.contains("→ ReturnStmt: Return Statement"));

        let quiet = build_default_analyzer(AnalysisConfig::default());
        let out = quiet
            .render(&result, OutputFormat::Annotated, Some("one.cpp"))
            .unwrap();
        assert!(!out.contains("→"));
    }

    #[test]
    fn analyze_with_uses_dump_source() {
        let dir = tempdir().unwrap();
        let job = write_pair(dir.path(), "two", 1, 1);

        let analyzer = build_default_analyzer(AnalysisConfig::default());
        let result = analyze_with(&analyzer, &FileDumpSource::Alongside, &job.source).unwrap();
        assert_eq!(result.line_index.get(1), vec!["ReturnStmt"]);

        let missing = analyze_with(
            &analyzer,
            &FileDumpSource::in_dir(dir.path().join("absent")),
            &job.source,
        );
        assert!(missing.is_err());
    }

    #[test]
    fn batch_preserves_order_and_isolates_failures() {
        let dir = tempdir().unwrap();
        let mut jobs: Vec<AnalysisJob> = (1..=8)
            .map(|i| write_pair(dir.path(), &format!("f{i}"), i, 10))
            .collect();
        jobs.insert(3, AnalysisJob::new(dir.path().join("nope.json"), dir.path().join("nope.cpp")));

        let analyzer = build_default_analyzer(AnalysisConfig::default());
        let results = analyze_batch(&analyzer, &jobs);
        assert_eq!(results.len(), 9);
        assert!(results[3].is_err());

        let lines: Vec<usize> = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|r| r.line_index.lines().next().unwrap())
            .collect();
        assert_eq!(lines, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_batch() {
        let analyzer = build_default_analyzer(AnalysisConfig::default());
        assert!(analyze_batch(&analyzer, &[]).is_empty());
    }
}
