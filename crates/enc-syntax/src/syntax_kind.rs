use rowan::Language;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Unified syntax kind for both tokens and nodes of the member-level tree.
///
/// Tokens are declared before [`SyntaxKind::CompilationUnit`]; every kind from there up to
/// `__Last` is a node. Partner matching compares these tags directly, so the set must stay
/// stable across the old and new trees of an edit session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_repr, Deserialize_repr,
)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Trivia ---
    Whitespace,
    LineComment,
    BlockComment,

    // --- Identifiers & literals ---
    Identifier,
    IntLiteral,
    StringLiteral,

    // --- Keywords ---
    AbstractKw,
    AddKw,
    AsyncKw,
    AwaitKw,
    BreakKw,
    ClassKw,
    ConstKw,
    DelegateKw,
    ElseKw,
    EventKw,
    ExplicitKw,
    ExternKw,
    FalseKw,
    ForKw,
    ForEachKw,
    GetKw,
    IfKw,
    ImplicitKw,
    InKw,
    InitKw,
    InterfaceKw,
    InternalKw,
    NamespaceKw,
    NewKw,
    NullKw,
    OperatorKw,
    OverrideKw,
    PartialKw,
    PrivateKw,
    ProtectedKw,
    PublicKw,
    ReadonlyKw,
    RemoveKw,
    ReturnKw,
    SealedKw,
    SetKw,
    StaticKw,
    StructKw,
    ThisKw,
    TrueKw,
    UnsafeKw,
    UsingKw,
    VarKw,
    VirtualKw,
    VoidKw,
    WhileKw,
    YieldKw,

    // --- Punctuation ---
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,
    Question,
    FatArrow,
    Tilde,
    Bang,
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    EqEq,
    Less,
    Greater,

    // --- Special ---
    Error,

    // --- Nodes ---
    CompilationUnit,
    GlobalStatement,
    NamespaceDeclaration,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,

    Modifiers,
    TypeRef,
    TypeParameterList,
    TypeParameter,
    ParameterList,
    BracketedParameterList,
    Parameter,
    ArgumentList,
    Argument,

    MethodDeclaration,
    ConstructorDeclaration,
    ConstructorInitializer,
    DestructorDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    PropertyDeclaration,
    IndexerDeclaration,
    EventDeclaration,
    FieldDeclaration,
    AccessorList,
    GetAccessorDeclaration,
    SetAccessorDeclaration,
    InitAccessorDeclaration,
    AddAccessorDeclaration,
    RemoveAccessorDeclaration,
    ArrowExpressionClause,
    EqualsValueClause,
    VariableDeclaration,
    VariableDeclarator,

    // Statements
    Block,
    EmptyStatement,
    ExpressionStatement,
    LocalDeclarationStatement,
    LocalFunctionStatement,
    IfStatement,
    ElseClause,
    WhileStatement,
    ForStatement,
    ForEachStatement,
    UsingStatement,
    ReturnStatement,
    YieldReturnStatement,
    YieldBreakStatement,
    BreakStatement,

    // Expressions
    IdentifierName,
    LiteralExpression,
    ThisExpression,
    ParenthesizedExpression,
    InvocationExpression,
    MemberAccessExpression,
    ObjectCreationExpression,
    PrefixUnaryExpression,
    BinaryExpression,
    AssignmentExpression,
    AwaitExpression,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    AnonymousMethodExpression,

    __Last,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::LineComment | SyntaxKind::BlockComment
        )
    }

    pub fn is_token(self) -> bool {
        (self as u16) < (SyntaxKind::CompilationUnit as u16)
    }

    pub fn is_keyword(self) -> bool {
        (SyntaxKind::AbstractKw as u16..=SyntaxKind::YieldKw as u16).contains(&(self as u16))
    }

    /// Keywords that may appear inside a [`SyntaxKind::Modifiers`] node.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKw
                | SyntaxKind::AsyncKw
                | SyntaxKind::ConstKw
                | SyntaxKind::ExternKw
                | SyntaxKind::InternalKw
                | SyntaxKind::NewKw
                | SyntaxKind::OverrideKw
                | SyntaxKind::PartialKw
                | SyntaxKind::PrivateKw
                | SyntaxKind::ProtectedKw
                | SyntaxKind::PublicKw
                | SyntaxKind::ReadonlyKw
                | SyntaxKind::SealedKw
                | SyntaxKind::StaticKw
                | SyntaxKind::UnsafeKw
                | SyntaxKind::VirtualKw
        )
    }

    pub fn is_accessor(self) -> bool {
        matches!(
            self,
            SyntaxKind::GetAccessorDeclaration
                | SyntaxKind::SetAccessorDeclaration
                | SyntaxKind::InitAccessorDeclaration
                | SyntaxKind::AddAccessorDeclaration
                | SyntaxKind::RemoveAccessorDeclaration
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::EmptyStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::LocalDeclarationStatement
                | SyntaxKind::LocalFunctionStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForEachStatement
                | SyntaxKind::UsingStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::YieldReturnStatement
                | SyntaxKind::YieldBreakStatement
                | SyntaxKind::BreakStatement
        )
    }

    pub fn is_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::IdentifierName
                | SyntaxKind::LiteralExpression
                | SyntaxKind::ThisExpression
                | SyntaxKind::ParenthesizedExpression
                | SyntaxKind::InvocationExpression
                | SyntaxKind::MemberAccessExpression
                | SyntaxKind::ObjectCreationExpression
                | SyntaxKind::PrefixUnaryExpression
                | SyntaxKind::BinaryExpression
                | SyntaxKind::AssignmentExpression
                | SyntaxKind::AwaitExpression
                | SyntaxKind::SimpleLambdaExpression
                | SyntaxKind::ParenthesizedLambdaExpression
                | SyntaxKind::AnonymousMethodExpression
        )
    }

    pub fn is_lambda_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::SimpleLambdaExpression
                | SyntaxKind::ParenthesizedLambdaExpression
                | SyntaxKind::AnonymousMethodExpression
        )
    }

    /// Canonical source text for tokens whose spelling never varies.
    pub fn fixed_text(self) -> Option<&'static str> {
        Some(match self {
            SyntaxKind::AbstractKw => "abstract",
            SyntaxKind::AddKw => "add",
            SyntaxKind::AsyncKw => "async",
            SyntaxKind::AwaitKw => "await",
            SyntaxKind::BreakKw => "break",
            SyntaxKind::ClassKw => "class",
            SyntaxKind::ConstKw => "const",
            SyntaxKind::DelegateKw => "delegate",
            SyntaxKind::ElseKw => "else",
            SyntaxKind::EventKw => "event",
            SyntaxKind::ExplicitKw => "explicit",
            SyntaxKind::ExternKw => "extern",
            SyntaxKind::FalseKw => "false",
            SyntaxKind::ForKw => "for",
            SyntaxKind::ForEachKw => "foreach",
            SyntaxKind::GetKw => "get",
            SyntaxKind::IfKw => "if",
            SyntaxKind::ImplicitKw => "implicit",
            SyntaxKind::InKw => "in",
            SyntaxKind::InitKw => "init",
            SyntaxKind::InterfaceKw => "interface",
            SyntaxKind::InternalKw => "internal",
            SyntaxKind::NamespaceKw => "namespace",
            SyntaxKind::NewKw => "new",
            SyntaxKind::NullKw => "null",
            SyntaxKind::OperatorKw => "operator",
            SyntaxKind::OverrideKw => "override",
            SyntaxKind::PartialKw => "partial",
            SyntaxKind::PrivateKw => "private",
            SyntaxKind::ProtectedKw => "protected",
            SyntaxKind::PublicKw => "public",
            SyntaxKind::ReadonlyKw => "readonly",
            SyntaxKind::RemoveKw => "remove",
            SyntaxKind::ReturnKw => "return",
            SyntaxKind::SealedKw => "sealed",
            SyntaxKind::SetKw => "set",
            SyntaxKind::StaticKw => "static",
            SyntaxKind::StructKw => "struct",
            SyntaxKind::ThisKw => "this",
            SyntaxKind::TrueKw => "true",
            SyntaxKind::UnsafeKw => "unsafe",
            SyntaxKind::UsingKw => "using",
            SyntaxKind::VarKw => "var",
            SyntaxKind::VirtualKw => "virtual",
            SyntaxKind::VoidKw => "void",
            SyntaxKind::WhileKw => "while",
            SyntaxKind::YieldKw => "yield",

            SyntaxKind::LParen => "(",
            SyntaxKind::RParen => ")",
            SyntaxKind::LBrace => "{",
            SyntaxKind::RBrace => "}",
            SyntaxKind::LBracket => "[",
            SyntaxKind::RBracket => "]",
            SyntaxKind::Semicolon => ";",
            SyntaxKind::Comma => ",",
            SyntaxKind::Dot => ".",
            SyntaxKind::Colon => ":",
            SyntaxKind::Question => "?",
            SyntaxKind::FatArrow => "=>",
            SyntaxKind::Tilde => "~",
            SyntaxKind::Bang => "!",
            SyntaxKind::Plus => "+",
            SyntaxKind::Minus => "-",
            SyntaxKind::Star => "*",
            SyntaxKind::Slash => "/",
            SyntaxKind::Eq => "=",
            SyntaxKind::EqEq => "==",
            SyntaxKind::Less => "<",
            SyntaxKind::Greater => ">",

            _ => return None,
        })
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(value: SyntaxKind) -> Self {
        rowan::SyntaxKind(value as u16)
    }
}

/// Rowan language marker for the member-level tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EncLanguage {}

impl Language for EncLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        if raw.0 < SyntaxKind::__Last as u16 {
            // SAFETY: We've verified the numeric value is within the enum range.
            unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
        } else {
            SyntaxKind::Error
        }
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        kind.into()
    }
}
