//! Renderers turning a line index plus source text into output artifacts.
//!
//! Every renderer walks the source lines in order and emits each of them,
//! annotated or not. Lines recorded in the index past the end of the
//! source are ignored except by the structured renderer, which reports the
//! index as-is.

pub mod delimited;
pub mod html;
pub mod inline;
pub mod markdown;
pub mod side_by_side;
pub mod structured;
pub mod table;
pub mod text;

use crate::error::Result;
use astlens_api::{AnalysisResult, ApiError, ApiResult, ExplanationTable, LineIndex, LineKinds};
use std::fmt;
use std::str::FromStr;

/// Placeholder title when no source name is supplied.
pub const UNNAMED_SOURCE: &str = "<source>";

/// Inputs shared by all renderers.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub source_lines: &'a [String],
    pub index: &'a LineIndex,
    pub explanations: Option<&'a dyn ExplanationTable>,
    pub source_name: Option<&'a str>,
}

/// One source line with its annotation slot.
pub struct Row<'a> {
    pub number: usize,
    pub source: &'a str,
    pub kinds: Option<&'a LineKinds>,
}

impl<'a> RenderContext<'a> {
    pub fn new(source_lines: &'a [String], index: &'a LineIndex) -> Self {
        Self {
            source_lines,
            index,
            explanations: None,
            source_name: None,
        }
    }

    pub fn from_result(result: &'a AnalysisResult) -> Self {
        Self::new(&result.source_lines, &result.line_index)
    }

    pub fn with_explanations(mut self, table: Option<&'a dyn ExplanationTable>) -> Self {
        self.explanations = table;
        self
    }

    pub fn with_source_name(mut self, name: Option<&'a str>) -> Self {
        self.source_name = name;
        self
    }

    pub fn title(&self) -> &'a str {
        self.source_name.unwrap_or(UNNAMED_SOURCE)
    }

    /// Every source line, 1-based, with its kinds if any were recorded.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + 'a {
        let index = self.index;
        self.source_lines.iter().enumerate().map(move |(i, line)| Row {
            number: i + 1,
            source: line.trim_end(),
            kinds: index.line(i + 1),
        })
    }

    /// Description of `kind` when an explanation table is active.
    pub fn explain(&self, kind: &'a str) -> Option<&'a str> {
        self.explanations.map(|table| table.explain(kind))
    }
}

/// Output formats, one per renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Annotated,
    SideBySide,
    Table,
    Csv,
    Json,
    Markdown,
    Html,
}

impl OutputFormat {
    pub const ALL_FORMATS: [OutputFormat; 7] = [
        OutputFormat::Annotated,
        OutputFormat::SideBySide,
        OutputFormat::Table,
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Annotated => "annotated",
            OutputFormat::SideBySide => "side-by-side",
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
        Ok(match self {
            OutputFormat::Annotated => inline::render(ctx),
            OutputFormat::SideBySide => side_by_side::render(ctx),
            OutputFormat::Table => table::render(ctx),
            OutputFormat::Csv => delimited::render(ctx),
            OutputFormat::Json => structured::render(ctx)?,
            OutputFormat::Markdown => markdown::render(ctx),
            OutputFormat::Html => html::render(ctx),
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "annotated" | "inline" => Ok(OutputFormat::Annotated),
            "side-by-side" | "side_by_side" | "sidebyside" => Ok(OutputFormat::SideBySide),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(ApiError::UnknownOutputFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for format in OutputFormat::ALL_FORMATS {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
        let err = "pdf".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, ApiError::UnknownOutputFormat(name) if name == "pdf"));
    }

    #[test]
    fn rows_cover_every_source_line() {
        let lines = vec!["int a;  ".to_string(), "".to_string()];
        let mut index = LineIndex::new();
        index.add(1, "VarDecl");
        index.add(9, "ReturnStmt");

        let ctx = RenderContext::new(&lines, &index);
        let rows: Vec<Row<'_>> = ctx.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].source, "int a;");
        assert_eq!(rows[0].kinds.map(|k| k.join(",")), Some("VarDecl".to_string()));
        assert!(rows[1].kinds.is_none());
    }
}
