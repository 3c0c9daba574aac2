//! Typed wrappers over the member-level tree.
//!
//! Each wrapper is a zero-cost view over a [`SyntaxNode`] of one (or, for accessors and
//! lambdas, several) node kinds. Accessors only look at direct children.

use crate::ast::{support, AstNode, HasBlockOrArrowBody, HasModifiers};
use crate::syntax_kind::SyntaxKind;
use crate::{SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident => $($kind:ident)|+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$kind)|+)
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self { syntax })
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(CompilationUnit => CompilationUnit);
ast_node!(GlobalStatement => GlobalStatement);
ast_node!(Modifiers => Modifiers);
ast_node!(TypeParameterList => TypeParameterList);
ast_node!(TypeParameter => TypeParameter);
ast_node!(
    /// `( ... )` for methods and operators, `[ ... ]` for indexers.
    ParameterList => ParameterList | BracketedParameterList
);
ast_node!(Parameter => Parameter);

ast_node!(MethodDeclaration => MethodDeclaration);
ast_node!(ConstructorDeclaration => ConstructorDeclaration);
ast_node!(DestructorDeclaration => DestructorDeclaration);
ast_node!(OperatorDeclaration => OperatorDeclaration);
ast_node!(ConversionOperatorDeclaration => ConversionOperatorDeclaration);
ast_node!(PropertyDeclaration => PropertyDeclaration);
ast_node!(IndexerDeclaration => IndexerDeclaration);
ast_node!(EventDeclaration => EventDeclaration);
ast_node!(FieldDeclaration => FieldDeclaration);
ast_node!(AccessorList => AccessorList);
ast_node!(
    /// Any of the `get`/`set`/`init`/`add`/`remove` accessor declarations.
    AccessorDeclaration => GetAccessorDeclaration
        | SetAccessorDeclaration
        | InitAccessorDeclaration
        | AddAccessorDeclaration
        | RemoveAccessorDeclaration
);
ast_node!(ArrowExpressionClause => ArrowExpressionClause);
ast_node!(EqualsValueClause => EqualsValueClause);
ast_node!(VariableDeclaration => VariableDeclaration);
ast_node!(VariableDeclarator => VariableDeclarator);

ast_node!(Block => Block);
ast_node!(LocalDeclarationStatement => LocalDeclarationStatement);
ast_node!(LocalFunctionStatement => LocalFunctionStatement);
ast_node!(ForEachStatement => ForEachStatement);
ast_node!(UsingStatement => UsingStatement);
ast_node!(YieldReturnStatement => YieldReturnStatement);
ast_node!(YieldBreakStatement => YieldBreakStatement);

ast_node!(AwaitExpression => AwaitExpression);
ast_node!(
    /// Lambdas (`x => ..`, `(a, b) => ..`) and anonymous methods (`delegate { .. }`).
    LambdaExpression => SimpleLambdaExpression
        | ParenthesizedLambdaExpression
        | AnonymousMethodExpression
);

/// Any statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    syntax: SyntaxNode,
}

impl AstNode for Statement {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_statement()
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        Self::can_cast(syntax.kind()).then_some(Self { syntax })
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

/// Any expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    syntax: SyntaxNode,
}

impl AstNode for Expression {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_expression()
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        Self::can_cast(syntax.kind()).then_some(Self { syntax })
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl HasModifiers for MethodDeclaration {}
impl HasModifiers for ConstructorDeclaration {}
impl HasModifiers for DestructorDeclaration {}
impl HasModifiers for OperatorDeclaration {}
impl HasModifiers for ConversionOperatorDeclaration {}
impl HasModifiers for PropertyDeclaration {}
impl HasModifiers for IndexerDeclaration {}
impl HasModifiers for EventDeclaration {}
impl HasModifiers for FieldDeclaration {}
impl HasModifiers for AccessorDeclaration {}
impl HasModifiers for LocalFunctionStatement {}
impl HasModifiers for LambdaExpression {}

impl HasBlockOrArrowBody for MethodDeclaration {}
impl HasBlockOrArrowBody for ConstructorDeclaration {}
impl HasBlockOrArrowBody for DestructorDeclaration {}
impl HasBlockOrArrowBody for OperatorDeclaration {}
impl HasBlockOrArrowBody for ConversionOperatorDeclaration {}
impl HasBlockOrArrowBody for AccessorDeclaration {}
impl HasBlockOrArrowBody for LocalFunctionStatement {}

impl CompilationUnit {
    pub fn global_statements(&self) -> impl Iterator<Item = GlobalStatement> + '_ {
        support::children::<GlobalStatement>(&self.syntax)
    }

    /// Top-level members in source order (global statements, namespaces, type declarations).
    pub fn members(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.syntax.children()
    }
}

impl TypeParameterList {
    pub fn type_parameters(&self) -> impl Iterator<Item = TypeParameter> + '_ {
        support::children::<TypeParameter>(&self.syntax)
    }
}

impl ParameterList {
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        support::children::<Parameter>(&self.syntax)
    }
}

impl Parameter {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        support::ident_token(&self.syntax)
    }
}

impl MethodDeclaration {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        support::ident_token(&self.syntax)
    }

    pub fn type_parameter_list(&self) -> Option<TypeParameterList> {
        support::child::<TypeParameterList>(&self.syntax)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        support::child::<ParameterList>(&self.syntax)
    }
}

impl ConstructorDeclaration {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        support::ident_token(&self.syntax)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        support::child::<ParameterList>(&self.syntax)
    }
}

impl DestructorDeclaration {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        support::ident_token(&self.syntax)
    }
}

impl OperatorDeclaration {
    pub fn parameter_list(&self) -> Option<ParameterList> {
        support::child::<ParameterList>(&self.syntax)
    }
}

impl PropertyDeclaration {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        support::ident_token(&self.syntax)
    }

    pub fn accessor_list(&self) -> Option<AccessorList> {
        support::child::<AccessorList>(&self.syntax)
    }

    pub fn expression_body(&self) -> Option<ArrowExpressionClause> {
        support::child::<ArrowExpressionClause>(&self.syntax)
    }

    /// The `= value` part of an auto-property initializer.
    pub fn initializer(&self) -> Option<EqualsValueClause> {
        support::child::<EqualsValueClause>(&self.syntax)
    }
}

impl IndexerDeclaration {
    pub fn parameter_list(&self) -> Option<ParameterList> {
        support::child::<ParameterList>(&self.syntax)
    }

    pub fn accessor_list(&self) -> Option<AccessorList> {
        support::child::<AccessorList>(&self.syntax)
    }

    pub fn expression_body(&self) -> Option<ArrowExpressionClause> {
        support::child::<ArrowExpressionClause>(&self.syntax)
    }
}

impl EventDeclaration {
    pub fn accessor_list(&self) -> Option<AccessorList> {
        support::child::<AccessorList>(&self.syntax)
    }
}

impl FieldDeclaration {
    pub fn declaration(&self) -> Option<VariableDeclaration> {
        support::child::<VariableDeclaration>(&self.syntax)
    }
}

impl AccessorList {
    pub fn accessors(&self) -> impl Iterator<Item = AccessorDeclaration> + '_ {
        support::children::<AccessorDeclaration>(&self.syntax)
    }
}

impl AccessorDeclaration {
    pub fn kind(&self) -> SyntaxKind {
        self.syntax.kind()
    }
}

impl ArrowExpressionClause {
    pub fn expression(&self) -> Option<Expression> {
        support::child::<Expression>(&self.syntax)
    }
}

impl EqualsValueClause {
    pub fn value(&self) -> Option<Expression> {
        support::child::<Expression>(&self.syntax)
    }
}

impl VariableDeclaration {
    pub fn declarators(&self) -> impl Iterator<Item = VariableDeclarator> + '_ {
        support::children::<VariableDeclarator>(&self.syntax)
    }
}

impl VariableDeclarator {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        support::ident_token(&self.syntax)
    }

    pub fn initializer(&self) -> Option<EqualsValueClause> {
        support::child::<EqualsValueClause>(&self.syntax)
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        support::children::<Statement>(&self.syntax)
    }
}

impl LocalDeclarationStatement {
    pub fn await_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, SyntaxKind::AwaitKw)
    }

    pub fn using_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, SyntaxKind::UsingKw)
    }

    pub fn declaration(&self) -> Option<VariableDeclaration> {
        support::child::<VariableDeclaration>(&self.syntax)
    }
}

impl LocalFunctionStatement {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        support::ident_token(&self.syntax)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        support::child::<ParameterList>(&self.syntax)
    }
}

impl ForEachStatement {
    pub fn await_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, SyntaxKind::AwaitKw)
    }
}

impl UsingStatement {
    pub fn await_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, SyntaxKind::AwaitKw)
    }
}

impl YieldReturnStatement {
    pub fn expression(&self) -> Option<Expression> {
        support::child::<Expression>(&self.syntax)
    }
}

impl AwaitExpression {
    pub fn expression(&self) -> Option<Expression> {
        support::child::<Expression>(&self.syntax)
    }
}

impl LambdaExpression {
    /// Block body of a statement lambda or anonymous method.
    pub fn body(&self) -> Option<Block> {
        support::child::<Block>(&self.syntax)
    }

    /// Expression body of an expression lambda (the expression after `=>`).
    pub fn expression_body(&self) -> Option<Expression> {
        support::child::<Expression>(&self.syntax)
    }
}
