//! Short display label for a node: its name, literal value or operator.

use astlens_api::{FieldValue, SyntaxNode};

pub fn node_label(node: &SyntaxNode) -> Option<String> {
    if let Some(name) = node.get_str("name").filter(|n| !n.is_empty()) {
        return Some(name.to_string());
    }

    let value = node.get("value").and_then(FieldValue::scalar_text);
    match node.kind() {
        Some("IntegerLiteral" | "CXXBoolLiteralExpr" | "FloatingLiteral") => {
            if let Some(value) = value {
                return Some(value);
            }
        }
        // Clang already quotes string literal values; only bare ones get quotes.
        Some("StringLiteral") => {
            if let Some(value) = value {
                return Some(if value.starts_with('"') {
                    value
                } else {
                    format!("\"{value}\"")
                });
            }
        }
        Some("CharacterLiteral") => {
            if let Some(value) = value {
                return Some(format!("'{value}'"));
            }
        }
        _ => {}
    }

    if let Some(opcode) = node.get_str("opcode") {
        return Some(opcode.to_string());
    }

    node.get_node("type")
        .and_then(|t| t.get_str("qualType"))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
