//! Syntax tree primitives for edit-and-continue analysis.
//!
//! Trees are rowan red/green trees over [`EncLanguage`]. This crate never parses text: the
//! driver that owns a parser hands its output over through [`TreeBuilder`] and gets back a
//! [`SyntaxNode`] root. Typed views over that tree live in [`ast`].

pub mod ast;
mod builder;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;
mod syntax_kind;

pub use ast::*;
pub use builder::TreeBuilder;
pub use rowan::{GreenNode, TextRange, TextSize};
pub use syntax_kind::{EncLanguage, SyntaxKind};

pub type SyntaxNode = rowan::SyntaxNode<EncLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<EncLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<EncLanguage>;
