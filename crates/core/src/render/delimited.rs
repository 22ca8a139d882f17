//! Comma-separated export: one header row, then one row per source line.
//! Kinds and explanations are flattened into single `; `-joined fields.

use super::RenderContext;
use std::borrow::Cow;

pub const HEADER: [&str; 4] = ["Line", "Source", "Kinds", "Explanations"];
const LIST_SEPARATOR: &str = "; ";

pub fn render(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    push_record(&mut out, HEADER.iter().copied());

    for row in ctx.rows() {
        let (kinds, explanations) = match row.kinds {
            Some(kinds) => {
                let explanations = match ctx.explanations {
                    Some(_) => kinds
                        .iter()
                        .filter_map(|kind| ctx.explain(kind).map(|text| format!("{kind}: {text}")))
                        .collect::<Vec<_>>()
                        .join(LIST_SEPARATOR),
                    None => String::new(),
                };
                (kinds.join(LIST_SEPARATOR), explanations)
            }
            None => (String::new(), String::new()),
        };
        let number = row.number.to_string();
        push_record(
            &mut out,
            [number.as_str(), row.source, kinds.as_str(), explanations.as_str()],
        );
    }

    out
}

fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote(field));
    }
    out.push('\n');
}

/// Quotes a field only when it holds a delimiter, quote or line break.
fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::BuiltinExplanations;
    use astlens_api::LineIndex;

    #[test]
    fn header_and_one_record_per_line() {
        let lines = vec!["int x;".to_string(), "".to_string()];
        let mut index = LineIndex::new();
        index.add(1, "VarDecl");
        index.add(1, "DeclStmt");

        let out = render(&RenderContext::new(&lines, &index));
        let records: Vec<&str> = out.lines().collect();
        assert_eq!(records, vec!["Line,Source,Kinds,Explanations", "1,int x;,VarDecl; DeclStmt,", "2,,,"]);
    }

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        let lines = vec![r#"printf("%d, %d", a, b);"#.to_string()];
        let mut index = LineIndex::new();
        index.add(1, "CallExpr");

        let out = render(&RenderContext::new(&lines, &index));
        assert!(out.contains(r#"1,"printf(""%d, %d"", a, b);",CallExpr,"#));
    }

    #[test]
    fn explanations_column_is_filled_when_table_given() {
        let lines = vec!["return 0;".to_string()];
        let mut index = LineIndex::new();
        index.add(1, "ReturnStmt");
        index.add(1, "IntegerLiteral");
        let table = BuiltinExplanations::new();

        let out = render(&RenderContext::new(&lines, &index).with_explanations(Some(&table)));
        assert!(out.contains(
            "1,return 0;,ReturnStmt; IntegerLiteral,ReturnStmt: Return Statement; IntegerLiteral: Integer Literal"
        ));
    }
}
