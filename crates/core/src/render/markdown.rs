//! Markdown document with the annotated source in a fenced code block.

use super::RenderContext;

const FENCE: &str = "```";
const LANGUAGE: &str = "cpp";

pub fn render(ctx: &RenderContext<'_>) -> String {
    let mut out = vec![
        format!("# AST-Annotated Source: {}", ctx.title()),
        String::new(),
        format!("{FENCE}{LANGUAGE}"),
    ];

    for row in ctx.rows() {
        out.push(format!("{:>3}: {}", row.number, row.source));
        if let Some(kinds) = row.kinds {
            out.push(format!("     // AST: {}", kinds.join(", ")));
            for kind in kinds.iter() {
                if let Some(text) = ctx.explain(kind) {
                    out.push(format!("     // → {kind}: {text}"));
                }
            }
        }
        out.push(String::new());
    }

    out.push(FENCE.to_string());
    out.push(String::new());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::BuiltinExplanations;
    use astlens_api::LineIndex;

    #[test]
    fn fenced_listing_with_comments() {
        let lines = vec!["int x = 0;".to_string(), "x++;".to_string()];
        let mut index = LineIndex::new();
        index.add(1, "VarDecl");

        let out = render(&RenderContext::new(&lines, &index).with_source_name(Some("a.cpp")));
        assert!(out.starts_with("# AST-Annotated Source: a.cpp\n\n```cpp\n"));
        assert!(out.contains("  1: int x = 0;\n     // AST: VarDecl\n"));
        assert!(out.contains("  2: x++;\n\n"));
        assert!(out.trim_end().ends_with("```"));
    }

    #[test]
    fn explanation_comments_when_table_given() {
        let lines = vec!["if (x) {}".to_string()];
        let mut index = LineIndex::new();
        index.add(1, "IfStmt");
        let table = BuiltinExplanations::new();

        let out = render(&RenderContext::new(&lines, &index).with_explanations(Some(&table)));
        assert!(out.contains("     // → IfStmt: If Statement"));
    }

    #[test]
    fn empty_source_is_just_the_fence() {
        let lines: Vec<String> = Vec::new();
        let index = LineIndex::new();
        let out = render(&RenderContext::new(&lines, &index));
        assert_eq!(out, "# AST-Annotated Source: <source>\n\n```cpp\n```\n");
    }
}
