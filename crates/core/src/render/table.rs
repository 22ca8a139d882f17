//! Bordered `Line | Source | Kinds` table with fixed truncation widths.

use super::RenderContext;
use super::text::{expand_tabs, truncate};
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub const SOURCE_WIDTH: usize = 57;
pub const KINDS_WIDTH: usize = 47;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Kinds")]
    kinds: String,
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let mut rows = Vec::with_capacity(ctx.source_lines.len());

    for row in ctx.rows() {
        let kinds = row.kinds.map(|k| k.join(", ")).unwrap_or_default();
        rows.push(TableRow {
            line: row.number.to_string(),
            source: truncate(&expand_tabs(row.source), SOURCE_WIDTH).into_owned(),
            kinds: truncate(&kinds, KINDS_WIDTH).into_owned(),
        });

        if let Some(kinds) = row.kinds {
            for kind in kinds.iter() {
                if let Some(text) = ctx.explain(kind) {
                    rows.push(TableRow {
                        line: String::new(),
                        source: String::new(),
                        kinds: truncate(&format!("→ {kind}: {text}"), KINDS_WIDTH).into_owned(),
                    });
                }
            }
        }
    }

    let table = Table::new(rows).with(Style::psql()).to_string();
    format!("AST Table for: {}\n{}", ctx.title(), table)
}
