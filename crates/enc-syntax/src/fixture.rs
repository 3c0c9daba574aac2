//! Compact tree sketches for tests.
//!
//! A [`Sketch`] is a plain owned description of a tree that can be built into a real
//! [`SyntaxNode`]. The helpers below produce the tree shapes documented on the typed AST
//! wrappers, so tests can spell out `class C { async Task M() { await E; } }` without a
//! parser. Only available with the `fixtures` feature.

use crate::{SyntaxKind, SyntaxNode, TreeBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sketch {
    Node(SyntaxKind, Vec<Sketch>),
    Token(SyntaxKind, String),
}

impl Sketch {
    pub fn build(&self) -> SyntaxNode {
        let mut builder = TreeBuilder::new();
        self.write(&mut builder);
        builder.finish_syntax()
    }

    pub fn write(&self, builder: &mut TreeBuilder) {
        match self {
            Sketch::Node(kind, children) => {
                builder.start_node(*kind);
                for child in children {
                    child.write(builder);
                }
                builder.finish_node();
            }
            Sketch::Token(kind, text) => {
                builder.token(*kind, text);
            }
        }
    }
}

pub fn node(kind: SyntaxKind, children: impl IntoIterator<Item = Sketch>) -> Sketch {
    Sketch::Node(kind, children.into_iter().collect())
}

pub fn token(kind: SyntaxKind, text: &str) -> Sketch {
    Sketch::Token(kind, text.to_owned())
}

pub fn punct(kind: SyntaxKind) -> Sketch {
    token(kind, kind.fixed_text().unwrap_or_default())
}

pub fn ident(text: &str) -> Sketch {
    token(SyntaxKind::Identifier, text)
}

pub fn ws() -> Sketch {
    token(SyntaxKind::Whitespace, " ")
}

/// Body of a block-or-arrow member.
#[derive(Debug, Clone)]
pub enum MemberBody {
    Block(Sketch),
    Arrow(Sketch),
    /// `;` (abstract, extern, interface members, auto accessors).
    None,
}

impl MemberBody {
    fn into_children(self) -> Vec<Sketch> {
        match self {
            MemberBody::Block(block) => vec![block],
            MemberBody::Arrow(expr) => vec![arrow(expr), punct(SyntaxKind::Semicolon)],
            MemberBody::None => vec![punct(SyntaxKind::Semicolon)],
        }
    }
}

/// Body of a property, indexer or event.
#[derive(Debug, Clone)]
pub enum PropertyBody {
    Accessors(Vec<Sketch>),
    Arrow(Sketch),
}

impl PropertyBody {
    fn into_children(self) -> Vec<Sketch> {
        match self {
            PropertyBody::Accessors(accessors) => vec![accessor_list(accessors)],
            PropertyBody::Arrow(expr) => vec![arrow(expr), punct(SyntaxKind::Semicolon)],
        }
    }
}

// --- Expressions ---

pub fn name(text: &str) -> Sketch {
    node(SyntaxKind::IdentifierName, [ident(text)])
}

pub fn int(value: i64) -> Sketch {
    node(
        SyntaxKind::LiteralExpression,
        [token(SyntaxKind::IntLiteral, &value.to_string())],
    )
}

pub fn await_expr(expr: Sketch) -> Sketch {
    node(
        SyntaxKind::AwaitExpression,
        [punct(SyntaxKind::AwaitKw), ws(), expr],
    )
}

pub fn call(callee: &str, args: impl IntoIterator<Item = Sketch>) -> Sketch {
    let mut list = vec![punct(SyntaxKind::LParen)];
    for (idx, arg) in args.into_iter().enumerate() {
        if idx > 0 {
            list.push(punct(SyntaxKind::Comma));
        }
        list.push(node(SyntaxKind::Argument, [arg]));
    }
    list.push(punct(SyntaxKind::RParen));
    node(
        SyntaxKind::InvocationExpression,
        [name(callee), node(SyntaxKind::ArgumentList, list)],
    )
}

pub fn binary(lhs: Sketch, op: SyntaxKind, rhs: Sketch) -> Sketch {
    node(SyntaxKind::BinaryExpression, [lhs, punct(op), rhs])
}

/// `(modifiers) () => body`, where `body` is a block or an expression.
pub fn lambda(modifiers: &[SyntaxKind], body: Sketch) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(params(&[]));
    children.push(punct(SyntaxKind::FatArrow));
    children.push(body);
    node(SyntaxKind::ParenthesizedLambdaExpression, children)
}

/// `x => body`.
pub fn simple_lambda(modifiers: &[SyntaxKind], param: &str, body: Sketch) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(node(SyntaxKind::Parameter, [ident(param)]));
    children.push(punct(SyntaxKind::FatArrow));
    children.push(body);
    node(SyntaxKind::SimpleLambdaExpression, children)
}

/// `delegate { ... }`.
pub fn anonymous_method(modifiers: &[SyntaxKind], body: Sketch) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(punct(SyntaxKind::DelegateKw));
    children.push(body);
    node(SyntaxKind::AnonymousMethodExpression, children)
}

// --- Statements ---

pub fn block(statements: impl IntoIterator<Item = Sketch>) -> Sketch {
    let mut children = vec![punct(SyntaxKind::LBrace)];
    children.extend(statements);
    children.push(punct(SyntaxKind::RBrace));
    node(SyntaxKind::Block, children)
}

pub fn expr_stmt(expr: Sketch) -> Sketch {
    node(
        SyntaxKind::ExpressionStatement,
        [expr, punct(SyntaxKind::Semicolon)],
    )
}

pub fn if_stmt(condition: Sketch, then: Sketch) -> Sketch {
    node(
        SyntaxKind::IfStatement,
        [
            punct(SyntaxKind::IfKw),
            punct(SyntaxKind::LParen),
            condition,
            punct(SyntaxKind::RParen),
            then,
        ],
    )
}

pub fn while_stmt(condition: Sketch, body: Sketch) -> Sketch {
    node(
        SyntaxKind::WhileStatement,
        [
            punct(SyntaxKind::WhileKw),
            punct(SyntaxKind::LParen),
            condition,
            punct(SyntaxKind::RParen),
            body,
        ],
    )
}

pub fn return_stmt(expr: Option<Sketch>) -> Sketch {
    let mut children = vec![punct(SyntaxKind::ReturnKw)];
    if let Some(expr) = expr {
        children.push(ws());
        children.push(expr);
    }
    children.push(punct(SyntaxKind::Semicolon));
    node(SyntaxKind::ReturnStatement, children)
}

pub fn yield_return(expr: Sketch) -> Sketch {
    node(
        SyntaxKind::YieldReturnStatement,
        [
            punct(SyntaxKind::YieldKw),
            ws(),
            punct(SyntaxKind::ReturnKw),
            ws(),
            expr,
            punct(SyntaxKind::Semicolon),
        ],
    )
}

pub fn yield_break() -> Sketch {
    node(
        SyntaxKind::YieldBreakStatement,
        [
            punct(SyntaxKind::YieldKw),
            ws(),
            punct(SyntaxKind::BreakKw),
            punct(SyntaxKind::Semicolon),
        ],
    )
}

/// `[await] foreach (var item in collection) body`.
pub fn foreach(is_await: bool, item: &str, collection: Sketch, body: Sketch) -> Sketch {
    let mut children = Vec::new();
    if is_await {
        children.push(punct(SyntaxKind::AwaitKw));
        children.push(ws());
    }
    children.extend([
        punct(SyntaxKind::ForEachKw),
        punct(SyntaxKind::LParen),
        node(SyntaxKind::TypeRef, [punct(SyntaxKind::VarKw)]),
        ws(),
        ident(item),
        ws(),
        punct(SyntaxKind::InKw),
        ws(),
        collection,
        punct(SyntaxKind::RParen),
        body,
    ]);
    node(SyntaxKind::ForEachStatement, children)
}

/// `[await] using (resource) body`.
pub fn using_stmt(is_await: bool, resource: Sketch, body: Sketch) -> Sketch {
    let mut children = Vec::new();
    if is_await {
        children.push(punct(SyntaxKind::AwaitKw));
        children.push(ws());
    }
    children.extend([
        punct(SyntaxKind::UsingKw),
        punct(SyntaxKind::LParen),
        resource,
        punct(SyntaxKind::RParen),
        body,
    ]);
    node(SyntaxKind::UsingStatement, children)
}

/// `var a = .., b = ..;` as a variable declaration (no trailing `;`).
pub fn var_declaration(declarators: impl IntoIterator<Item = (&'static str, Sketch)>) -> Sketch {
    let mut children = vec![node(SyntaxKind::TypeRef, [punct(SyntaxKind::VarKw)]), ws()];
    for (idx, (var, value)) in declarators.into_iter().enumerate() {
        if idx > 0 {
            children.push(punct(SyntaxKind::Comma));
        }
        children.push(declarator(var, Some(value)));
    }
    node(SyntaxKind::VariableDeclaration, children)
}

pub fn declarator(var: &str, value: Option<Sketch>) -> Sketch {
    let mut children = vec![ident(var)];
    if let Some(value) = value {
        children.push(equals_value(value));
    }
    node(SyntaxKind::VariableDeclarator, children)
}

/// Local declaration statement; `prefix` holds leading keywords such as `await using`.
pub fn local_decl(
    prefix: &[SyntaxKind],
    declarators: impl IntoIterator<Item = (&'static str, Sketch)>,
) -> Sketch {
    let mut children = Vec::new();
    for kw in prefix {
        children.push(punct(*kw));
        children.push(ws());
    }
    children.push(var_declaration(declarators));
    children.push(punct(SyntaxKind::Semicolon));
    node(SyntaxKind::LocalDeclarationStatement, children)
}

pub fn local_function(modifiers: &[SyntaxKind], fn_name: &str, body: MemberBody) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(type_ref("Task"));
    children.push(ws());
    children.push(ident(fn_name));
    children.push(params(&[]));
    children.extend(body.into_children());
    node(SyntaxKind::LocalFunctionStatement, children)
}

pub fn global(statement: Sketch) -> Sketch {
    node(SyntaxKind::GlobalStatement, [statement])
}

// --- Declarations ---

pub fn mods(kinds: &[SyntaxKind]) -> Option<Sketch> {
    if kinds.is_empty() {
        return None;
    }
    let mut children = Vec::new();
    for kind in kinds {
        children.push(punct(*kind));
        children.push(ws());
    }
    Some(node(SyntaxKind::Modifiers, children))
}

pub fn type_ref(text: &str) -> Sketch {
    node(SyntaxKind::TypeRef, [ident(text)])
}

pub fn params(names: &[&str]) -> Sketch {
    parameter_list(SyntaxKind::ParameterList, names)
}

pub fn bracketed_params(names: &[&str]) -> Sketch {
    parameter_list(SyntaxKind::BracketedParameterList, names)
}

fn parameter_list(kind: SyntaxKind, names: &[&str]) -> Sketch {
    let (open, close) = match kind {
        SyntaxKind::BracketedParameterList => (SyntaxKind::LBracket, SyntaxKind::RBracket),
        _ => (SyntaxKind::LParen, SyntaxKind::RParen),
    };
    let mut children = vec![punct(open)];
    for (idx, param) in names.iter().enumerate() {
        if idx > 0 {
            children.push(punct(SyntaxKind::Comma));
        }
        children.push(node(
            SyntaxKind::Parameter,
            [type_ref("int"), ws(), ident(param)],
        ));
    }
    children.push(punct(close));
    node(kind, children)
}

pub fn type_params(names: &[&str]) -> Sketch {
    let mut children = vec![punct(SyntaxKind::Less)];
    for (idx, param) in names.iter().enumerate() {
        if idx > 0 {
            children.push(punct(SyntaxKind::Comma));
        }
        children.push(node(SyntaxKind::TypeParameter, [ident(param)]));
    }
    children.push(punct(SyntaxKind::Greater));
    node(SyntaxKind::TypeParameterList, children)
}

pub fn arrow(expr: Sketch) -> Sketch {
    node(
        SyntaxKind::ArrowExpressionClause,
        [punct(SyntaxKind::FatArrow), ws(), expr],
    )
}

pub fn equals_value(expr: Sketch) -> Sketch {
    node(
        SyntaxKind::EqualsValueClause,
        [punct(SyntaxKind::Eq), ws(), expr],
    )
}

pub fn method(
    modifiers: &[SyntaxKind],
    method_name: &str,
    param_names: &[&str],
    body: MemberBody,
) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(type_ref("Task"));
    children.push(ws());
    children.push(ident(method_name));
    children.push(params(param_names));
    children.extend(body.into_children());
    node(SyntaxKind::MethodDeclaration, children)
}

pub fn constructor(
    modifiers: &[SyntaxKind],
    type_name: &str,
    param_names: &[&str],
    body: MemberBody,
) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(ident(type_name));
    children.push(params(param_names));
    children.extend(body.into_children());
    node(SyntaxKind::ConstructorDeclaration, children)
}

pub fn destructor(type_name: &str, body: MemberBody) -> Sketch {
    let mut children = vec![punct(SyntaxKind::Tilde), ident(type_name), params(&[])];
    children.extend(body.into_children());
    node(SyntaxKind::DestructorDeclaration, children)
}

/// `public static C operator +(C a, C b) body`.
pub fn operator(body: MemberBody) -> Sketch {
    let mut children: Vec<Sketch> = mods(&[SyntaxKind::PublicKw, SyntaxKind::StaticKw])
        .into_iter()
        .collect();
    children.extend([
        type_ref("C"),
        ws(),
        punct(SyntaxKind::OperatorKw),
        punct(SyntaxKind::Plus),
        params(&["a", "b"]),
    ]);
    children.extend(body.into_children());
    node(SyntaxKind::OperatorDeclaration, children)
}

/// `public static implicit operator int(C c) body`.
pub fn conversion_operator(body: MemberBody) -> Sketch {
    let mut children: Vec<Sketch> = mods(&[SyntaxKind::PublicKw, SyntaxKind::StaticKw])
        .into_iter()
        .collect();
    children.extend([
        punct(SyntaxKind::ImplicitKw),
        ws(),
        punct(SyntaxKind::OperatorKw),
        ws(),
        type_ref("int"),
        params(&["c"]),
    ]);
    children.extend(body.into_children());
    node(SyntaxKind::ConversionOperatorDeclaration, children)
}

pub fn accessor(kind: SyntaxKind, body: MemberBody) -> Sketch {
    let keyword = match kind {
        SyntaxKind::SetAccessorDeclaration => SyntaxKind::SetKw,
        SyntaxKind::InitAccessorDeclaration => SyntaxKind::InitKw,
        SyntaxKind::AddAccessorDeclaration => SyntaxKind::AddKw,
        SyntaxKind::RemoveAccessorDeclaration => SyntaxKind::RemoveKw,
        _ => SyntaxKind::GetKw,
    };
    let mut children = vec![punct(keyword)];
    children.extend(body.into_children());
    node(kind, children)
}

pub fn accessor_list(accessors: Vec<Sketch>) -> Sketch {
    let mut children = vec![punct(SyntaxKind::LBrace)];
    children.extend(accessors);
    children.push(punct(SyntaxKind::RBrace));
    node(SyntaxKind::AccessorList, children)
}

pub fn property(
    modifiers: &[SyntaxKind],
    prop_name: &str,
    body: PropertyBody,
    initializer: Option<Sketch>,
) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(type_ref("int"));
    children.push(ws());
    children.push(ident(prop_name));
    children.extend(body.into_children());
    if let Some(value) = initializer {
        children.push(equals_value(value));
        children.push(punct(SyntaxKind::Semicolon));
    }
    node(SyntaxKind::PropertyDeclaration, children)
}

pub fn indexer(modifiers: &[SyntaxKind], body: PropertyBody) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.extend([
        type_ref("int"),
        ws(),
        punct(SyntaxKind::ThisKw),
        bracketed_params(&["i"]),
    ]);
    children.extend(body.into_children());
    node(SyntaxKind::IndexerDeclaration, children)
}

pub fn event(event_name: &str, accessors: Vec<Sketch>) -> Sketch {
    node(
        SyntaxKind::EventDeclaration,
        [
            punct(SyntaxKind::EventKw),
            ws(),
            type_ref("Action"),
            ws(),
            ident(event_name),
            accessor_list(accessors),
        ],
    )
}

pub fn field(modifiers: &[SyntaxKind], var: &str, value: Option<Sketch>) -> Sketch {
    let mut children: Vec<Sketch> = mods(modifiers).into_iter().collect();
    children.push(node(
        SyntaxKind::VariableDeclaration,
        [type_ref("int"), ws(), declarator(var, value)],
    ));
    children.push(punct(SyntaxKind::Semicolon));
    node(SyntaxKind::FieldDeclaration, children)
}

pub fn class(class_name: &str, members: impl IntoIterator<Item = Sketch>) -> Sketch {
    type_decl(SyntaxKind::ClassDeclaration, SyntaxKind::ClassKw, class_name, members)
}

pub fn interface(interface_name: &str, members: impl IntoIterator<Item = Sketch>) -> Sketch {
    type_decl(
        SyntaxKind::InterfaceDeclaration,
        SyntaxKind::InterfaceKw,
        interface_name,
        members,
    )
}

fn type_decl(
    kind: SyntaxKind,
    keyword: SyntaxKind,
    type_name: &str,
    members: impl IntoIterator<Item = Sketch>,
) -> Sketch {
    let mut children = vec![
        punct(keyword),
        ws(),
        ident(type_name),
        punct(SyntaxKind::LBrace),
    ];
    children.extend(members);
    children.push(punct(SyntaxKind::RBrace));
    node(kind, children)
}

pub fn unit(members: impl IntoIterator<Item = Sketch>) -> Sketch {
    node(SyntaxKind::CompilationUnit, members)
}

// --- Lookup ---

/// First node of `kind` in pre-order (including `root` itself).
pub fn first(root: &SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
    root.descendants()
        .find(|node| node.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} node in tree"))
}

/// All nodes of `kind` in pre-order.
pub fn all(root: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
    root.descendants().filter(|node| node.kind() == kind).collect()
}

/// First identifier token spelled `text`.
pub fn ident_named(root: &SyntaxNode, text: &str) -> crate::SyntaxToken {
    root.descendants_with_tokens()
        .filter_map(|el| el.into_token())
        .find(|tok| tok.kind() == SyntaxKind::Identifier && tok.text() == text)
        .unwrap_or_else(|| panic!("no identifier `{text}` in tree"))
}
