//! Two fixed-width columns: numbered source on the left, kinds on the right.

use super::RenderContext;
use super::text::{display_width, expand_tabs, pad, truncate};

pub const SOURCE_WIDTH: usize = 60;
pub const KINDS_WIDTH: usize = 40;
pub const EXPLANATION_WIDTH: usize = 35;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let rule = "=".repeat(SOURCE_WIDTH + 1 + KINDS_WIDTH);
    let mut out = vec![
        rule.clone(),
        format!("SIDE-BY-SIDE VIEW: {}", ctx.title()),
        rule,
        format!("{} AST NODES", pad("SOURCE CODE", SOURCE_WIDTH)),
        format!("{} {}", "-".repeat(SOURCE_WIDTH), "-".repeat(KINDS_WIDTH)),
    ];

    for row in ctx.rows() {
        let source = format!("{:>3}: {}", row.number, expand_tabs(row.source));
        let source = truncate(&source, SOURCE_WIDTH);
        let kinds = row
            .kinds
            .map(|k| format!("AST: {}", k.join(", ")))
            .unwrap_or_default();
        let line = format!(
            "{} {}",
            pad(&source, SOURCE_WIDTH),
            truncate(&kinds, KINDS_WIDTH)
        );
        out.push(line.trim_end().to_string());

        if let Some(kinds) = row.kinds {
            for kind in kinds.iter() {
                if let Some(text) = ctx.explain(kind) {
                    out.push(format!(
                        "{:SOURCE_WIDTH$} → {kind}: {}",
                        "",
                        truncate(text, EXPLANATION_WIDTH)
                    ));
                }
            }
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use astlens_api::LineIndex;

    #[test]
    fn kinds_start_after_fixed_source_column() {
        let lines = vec!["int x = 1;".to_string(), "".to_string()];
        let mut index = LineIndex::new();
        index.add(1, "VarDecl");

        let out = render(&RenderContext::new(&lines, &index));
        let row = out.lines().find(|l| l.starts_with("  1:")).unwrap();
        assert_eq!(row.find("AST: VarDecl"), Some(SOURCE_WIDTH + 1));
        assert!(out.lines().any(|l| l == "  2:"));
    }

    #[test]
    fn overlong_columns_are_truncated() {
        let lines = vec![format!("int {} = 0;", "v".repeat(100))];
        let mut index = LineIndex::new();
        for kind in ["VarDecl", "IntegerLiteral", "DeclStmt", "ImplicitCastExpr"] {
            index.add(1, kind);
        }

        let out = render(&RenderContext::new(&lines, &index));
        let row = out.lines().find(|l| l.starts_with("  1:")).unwrap();
        let (source, kinds) = row.split_at(SOURCE_WIDTH);
        assert!(source.ends_with("..."));
        assert!(kinds.trim().ends_with("..."));
        assert!(kinds.trim().chars().count() <= KINDS_WIDTH);
        // Display truncation leaves the index alone.
        assert_eq!(index.get(1).len(), 4);
    }

    #[test]
    fn wide_characters_keep_the_kinds_column_aligned() {
        let lines = vec![
            "std::string s = \"变量名\";".to_string(),
            format!("// {}", "注释".repeat(40)),
            "int x;".to_string(),
        ];
        let mut index = LineIndex::new();
        for line in 1..=3 {
            index.add(line, "VarDecl");
        }

        let out = render(&RenderContext::new(&lines, &index));
        for row in out.lines().filter(|l| l.contains("AST: VarDecl")) {
            let at = row.find("AST: VarDecl").unwrap();
            assert_eq!(display_width(&row[..at]), SOURCE_WIDTH + 1, "{row}");
        }
    }
}
