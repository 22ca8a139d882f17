//! Self-contained HTML page with one table row per source line.

use super::RenderContext;
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 2px 6px; text-align: left; vertical-align: top; }
th { background: #f0f0f0; }
td.line { color: #888; text-align: right; }
td.source { font-family: monospace; white-space: pre; }
td.ast { font-family: monospace; color: #0550ae; }
tr.has-ast { background: #f6f8ff; }";

/// Escapes text for use in element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let title = escape(ctx.title());
    let with_explanations = ctx.explanations.is_some();
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    // Writing into a String cannot fail.
    let _ = writeln!(out, "<title>AST-Annotated Source: {title}</title>");
    let _ = writeln!(out, "<style>\n{STYLE}\n</style>");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>AST-Annotated Source: {title}</h1>");
    out.push_str("<table>\n<thead>\n<tr><th>Line</th><th>Source Code</th><th>AST Nodes</th>");
    if with_explanations {
        out.push_str("<th>Explanations</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in ctx.rows() {
        let class = if row.kinds.is_some() { " class=\"has-ast\"" } else { "" };
        let kinds = row.kinds.map(|k| escape(&k.join(", "))).unwrap_or_default();
        let _ = write!(
            out,
            "<tr{class}><td class=\"line\">{}</td><td class=\"source\">{}</td><td class=\"ast\">{kinds}</td>",
            row.number,
            escape(row.source)
        );
        if with_explanations {
            let explained: Vec<String> = row
                .kinds
                .into_iter()
                .flat_map(|k| k.iter())
                .filter_map(|kind| ctx.explain(kind).map(|text| escape(&format!("{kind}: {text}"))))
                .collect();
            let _ = write!(out, "<td class=\"explanation\">{}</td>", explained.join("<br>"));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}
