//! Structured JSON record of the line index, with per-line detail.

use super::RenderContext;
use crate::classify::classify;
use crate::error::Result;
use astlens_api::KindCategory;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReport {
    /// Line number (as a string key) to kinds, ascending by line.
    pub line_mappings: IndexMap<String, Vec<String>>,
    /// Descriptions of the kinds present; empty without an explanation table.
    pub explanations: IndexMap<String, String>,
    /// One entry per source line.
    pub lines: Vec<LineRecord>,
    pub total_annotated_lines: usize,
    pub total_annotation_count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub number: usize,
    pub code: String,
    pub annotations: Vec<AnnotationRecord>,
    pub annotation_count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `Kind(label)` or just `Kind`.
    pub inline: String,
    pub category: KindCategory,
    pub description: String,
}

pub fn build_report(ctx: &RenderContext<'_>) -> StructuredReport {
    let mut line_mappings = IndexMap::new();
    let mut explanations = IndexMap::new();

    for (line, kinds) in ctx.index.iter() {
        line_mappings.insert(line.to_string(), kinds.iter().map(str::to_string).collect());
        for kind in kinds.iter() {
            if let Some(text) = ctx.explain(kind) {
                explanations
                    .entry(kind.to_string())
                    .or_insert_with(|| text.to_string());
            }
        }
    }

    let lines = ctx
        .rows()
        .map(|row| {
            let annotations: Vec<AnnotationRecord> = row
                .kinds
                .map(|kinds| {
                    kinds
                        .labeled()
                        .map(|(kind, label)| AnnotationRecord {
                            kind: kind.to_string(),
                            label: label.map(str::to_string),
                            inline: match label {
                                Some(label) => format!("{kind}({label})"),
                                None => kind.to_string(),
                            },
                            category: classify(kind),
                            description: ctx.explain(kind).unwrap_or(kind).to_string(),
                        })
                        .collect()
                })
                .unwrap_or_default();
            LineRecord {
                number: row.number,
                code: row.source.to_string(),
                annotation_count: annotations.len(),
                annotations,
            }
        })
        .collect();

    StructuredReport {
        line_mappings,
        explanations,
        lines,
        total_annotated_lines: ctx.index.len(),
        total_annotation_count: ctx.index.annotation_count(),
    }
}

pub fn render(ctx: &RenderContext<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&build_report(ctx))?)
}
