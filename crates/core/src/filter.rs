//! Filter profiles controlling which kinds reach the line index.

use crate::error::Result;
use astlens_api::FilterProfile;

/// Kinds kept by [`FilterProfile::Minimal`].
pub const MINIMAL_ALLOW: [&str; 20] = [
    "FunctionDecl",
    "CXXMethodDecl",
    "CXXConstructorDecl",
    "CXXDestructorDecl",
    "CXXRecordDecl",
    "VarDecl",
    "ParmVarDecl",
    "FieldDecl",
    "IfStmt",
    "ForStmt",
    "WhileStmt",
    "ReturnStmt",
    "CallExpr",
    "BinaryOperator",
    "DeclStmt",
    "CompoundStmt",
    "DeclRefExpr",
    "IntegerLiteral",
    "StringLiteral",
    "CXXOperatorCallExpr",
];

/// Wrapper kinds dropped by [`FilterProfile::Clean`].
pub const CLEAN_DENY: [&str; 8] = [
    "MaterializeTemporaryExpr",
    "CXXBindTemporaryExpr",
    "ExprWithCleanups",
    "ParenExpr",
    "AlignedAttr",
    "VisibilityAttr",
    "ImplicitCastExpr",
    "CXXFunctionalCastExpr",
];

pub fn include(kind: &str, profile: FilterProfile) -> bool {
    match profile {
        FilterProfile::Minimal => MINIMAL_ALLOW.contains(&kind),
        FilterProfile::Clean => !CLEAN_DENY.contains(&kind),
        FilterProfile::All => true,
    }
}

/// Like [`include`], with the profile given by name. Unknown names are an error.
pub fn include_named(kind: &str, profile: &str) -> Result<bool> {
    let profile: FilterProfile = profile.parse()?;
    Ok(include(kind, profile))
}
