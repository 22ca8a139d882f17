//! Source listing with an `AST:` line under every annotated line.

use super::RenderContext;

const RULE_WIDTH: usize = 60;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = vec![
        rule.clone(),
        format!("AST-ANNOTATED SOURCE: {}", ctx.title()),
        rule,
        String::new(),
    ];

    for row in ctx.rows() {
        out.push(format!("{:>3}: {}", row.number, row.source));
        if let Some(kinds) = row.kinds {
            out.push(format!("     AST: {}", kinds.join(", ")));
            for kind in kinds.iter() {
                if let Some(text) = ctx.explain(kind) {
                    out.push(format!("          → {kind}: {text}"));
                }
            }
        }
        out.push(String::new());
    }

    out.join("\n")
}
