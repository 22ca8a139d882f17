//! Built-in descriptions for common C and C++ node kinds.

use astlens_api::ExplanationTable;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Declarations
        ("TranslationUnitDecl", "Translation Unit (whole source file)"),
        ("FunctionDecl", "Function Declaration"),
        ("FunctionTemplateDecl", "Function Template Declaration"),
        ("CXXMethodDecl", "C++ Method Declaration"),
        ("CXXConstructorDecl", "C++ Constructor Declaration"),
        ("CXXDestructorDecl", "C++ Destructor Declaration"),
        ("CXXConversionDecl", "C++ Conversion Operator Declaration"),
        ("CXXRecordDecl", "C++ Class/Struct Declaration"),
        ("RecordDecl", "Struct/Union Declaration"),
        ("ClassTemplateDecl", "Class Template Declaration"),
        ("ClassTemplateSpecializationDecl", "Class Template Specialization"),
        ("TemplateTypeParmDecl", "Template Type Parameter"),
        ("NonTypeTemplateParmDecl", "Non-Type Template Parameter"),
        ("VarDecl", "Variable Declaration"),
        ("FieldDecl", "Field Declaration"),
        ("ParmVarDecl", "Parameter Variable Declaration"),
        ("NamespaceDecl", "Namespace Declaration"),
        ("UsingDecl", "Using Declaration"),
        ("UsingDirectiveDecl", "Using Directive (using namespace)"),
        ("TypedefDecl", "Typedef Declaration"),
        ("TypeAliasDecl", "Type Alias Declaration (using =)"),
        ("EnumDecl", "Enum Declaration"),
        ("EnumConstantDecl", "Enum Constant Declaration"),
        ("AccessSpecDecl", "Access Specifier (public/protected/private)"),
        ("FriendDecl", "Friend Declaration"),
        ("StaticAssertDecl", "Static Assertion"),
        // Statements
        ("CompoundStmt", "Compound Statement (Block)"),
        ("IfStmt", "If Statement"),
        ("ForStmt", "For Loop Statement"),
        ("WhileStmt", "While Loop Statement"),
        ("DoStmt", "Do-While Statement"),
        ("CXXForRangeStmt", "C++ Range-based For Loop"),
        ("SwitchStmt", "Switch Statement"),
        ("CaseStmt", "Case Statement"),
        ("DefaultStmt", "Default Statement"),
        ("ReturnStmt", "Return Statement"),
        ("BreakStmt", "Break Statement"),
        ("ContinueStmt", "Continue Statement"),
        ("GotoStmt", "Goto Statement"),
        ("LabelStmt", "Label Statement"),
        ("DeclStmt", "Declaration Statement"),
        ("ExprStmt", "Expression Statement"),
        ("NullStmt", "Null Statement"),
        // Expressions
        ("BinaryOperator", "Binary Operator"),
        ("UnaryOperator", "Unary Operator"),
        ("ConditionalOperator", "Conditional Operator (?:)"),
        ("CompoundAssignOperator", "Compound Assignment Operator"),
        ("CallExpr", "Function Call Expression"),
        ("CXXOperatorCallExpr", "C++ Operator Call Expression"),
        ("CXXMemberCallExpr", "C++ Member Function Call"),
        ("MemberExpr", "Member Access Expression"),
        ("ArraySubscriptExpr", "Array Subscript Expression"),
        ("DeclRefExpr", "Declaration Reference Expression"),
        ("InitListExpr", "Initializer List Expression"),
        ("LambdaExpr", "Lambda Expression"),
        ("IntegerLiteral", "Integer Literal"),
        ("FloatingLiteral", "Floating Point Literal"),
        ("StringLiteral", "String Literal"),
        ("CharacterLiteral", "Character Literal"),
        ("CXXBoolLiteralExpr", "Boolean Literal"),
        ("CXXNullPtrLiteralExpr", "Null Pointer Literal"),
        ("ParenExpr", "Parenthesized Expression"),
        ("UnaryExprOrTypeTraitExpr", "sizeof/alignof Expression"),
        // C++ specific
        ("CXXNewExpr", "C++ New Expression"),
        ("CXXDeleteExpr", "C++ Delete Expression"),
        ("CXXThisExpr", "C++ This Expression"),
        ("CXXThrowExpr", "C++ Throw Expression"),
        ("CXXTryStmt", "C++ Try Statement"),
        ("CXXCatchStmt", "C++ Catch Statement"),
        ("CXXConstructExpr", "C++ Constructor Expression"),
        ("CXXTemporaryObjectExpr", "C++ Temporary Object Expression"),
        ("CXXDefaultArgExpr", "C++ Default Argument"),
        // Casts
        ("ImplicitCastExpr", "Implicit Cast Expression"),
        ("CStyleCastExpr", "C-Style Cast Expression"),
        ("CXXFunctionalCastExpr", "C++ Functional Cast Expression"),
        ("CXXStaticCastExpr", "C++ Static Cast Expression"),
        ("CXXDynamicCastExpr", "C++ Dynamic Cast Expression"),
        ("CXXReinterpretCastExpr", "C++ Reinterpret Cast Expression"),
        ("CXXConstCastExpr", "C++ Const Cast Expression"),
        // Wrappers
        ("MaterializeTemporaryExpr", "Materialize Temporary Expression"),
        ("ExprWithCleanups", "Expression with Cleanups"),
        ("CXXBindTemporaryExpr", "C++ Bind Temporary Expression"),
    ])
});

/// Static kind-to-description table covering the common Clang node kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinExplanations;

impl BuiltinExplanations {
    pub fn new() -> Self {
        Self
    }

    pub fn len(&self) -> usize {
        BUILTIN.len()
    }

    pub fn is_empty(&self) -> bool {
        BUILTIN.is_empty()
    }
}

impl ExplanationTable for BuiltinExplanations {
    fn lookup(&self, kind: &str) -> Option<&str> {
        BUILTIN.get(kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kind_has_description() {
        let table = BuiltinExplanations::new();
        assert_eq!(table.explain("ReturnStmt"), "Return Statement");
        assert!(table.len() > 50);
    }

    #[test]
    fn unknown_kind_falls_back_to_name() {
        let table = BuiltinExplanations::new();
        assert_eq!(table.lookup("OMPParallelDirective"), None);
        assert_eq!(table.explain("OMPParallelDirective"), "OMPParallelDirective");
    }
}
