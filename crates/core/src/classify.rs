//! Node kind categories used for grouping annotations.

use astlens_api::KindCategory;

const CONTROL_SUFFIXES: [&str; 10] = [
    "IfStmt",
    "ForStmt",
    "ForRangeStmt",
    "WhileStmt",
    "DoStmt",
    "SwitchStmt",
    "CaseStmt",
    "DefaultStmt",
    "TryStmt",
    "CatchStmt",
];

const FLOW_MARKERS: [&str; 5] = ["Return", "Break", "Continue", "Goto", "Throw"];
const FUNCTION_MARKERS: [&str; 5] = ["Function", "Method", "Constructor", "Destructor", "Conversion"];
const CLASS_MARKERS: [&str; 5] = ["Record", "Class", "Struct", "Union", "Interface"];
const VARIABLE_MARKERS: [&str; 3] = ["Var", "Field", "Param"];
const EXPRESSION_SUFFIXES: [&str; 3] = ["Expr", "Operator", "Literal"];

/// Maps every kind name to exactly one category.
pub fn classify(kind: &str) -> KindCategory {
    match kind {
        "FunctionDecl" | "CXXMethodDecl" | "CXXConstructorDecl" | "CXXDestructorDecl" => {
            KindCategory::Function
        }
        "CXXRecordDecl" | "ClassTemplateDecl" => KindCategory::Class,
        "VarDecl" | "FieldDecl" | "ParmVarDecl" => KindCategory::Variable,
        "IfStmt" | "ForStmt" | "WhileStmt" | "CXXForRangeStmt" | "SwitchStmt" => {
            KindCategory::Control
        }
        "ReturnStmt" | "BreakStmt" | "ContinueStmt" => KindCategory::Flow,
        "BinaryOperator" | "UnaryOperator" | "CallExpr" | "DeclRefExpr" => {
            KindCategory::Expression
        }
        _ => classify_by_name(kind),
    }
}

/// Fallback for kinds outside the fixed table, driven by naming conventions.
fn classify_by_name(kind: &str) -> KindCategory {
    if kind.contains("Loop") || CONTROL_SUFFIXES.iter().any(|s| kind.ends_with(s)) {
        return KindCategory::Control;
    }
    if FLOW_MARKERS.iter().any(|m| kind.contains(m)) {
        return KindCategory::Flow;
    }
    if kind.ends_with("Decl") {
        if FUNCTION_MARKERS.iter().any(|m| kind.contains(m)) {
            return KindCategory::Function;
        }
        if CLASS_MARKERS.iter().any(|m| kind.contains(m)) {
            return KindCategory::Class;
        }
        if VARIABLE_MARKERS.iter().any(|m| kind.contains(m)) {
            return KindCategory::Variable;
        }
    }
    if EXPRESSION_SUFFIXES.iter().any(|s| kind.ends_with(s)) {
        return KindCategory::Expression;
    }
    KindCategory::Other
}
